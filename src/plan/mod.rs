//! Hierarchical project scheduling.
//!
//! This module implements the scheduling core: the workspace → project →
//! sprint → column → task containment tree, interval placement rules, the
//! draft/commit transaction model for timeline edits, and immediate board
//! moves. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
