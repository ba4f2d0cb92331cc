//! Port contracts for the planning engine.
//!
//! Ports define infrastructure-agnostic interfaces used by planning
//! services.

pub mod store;

pub use store::{PlanStore, PlanStoreError, PlanStoreResult};
