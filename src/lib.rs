//! Metronome: hierarchical project-scheduling engine.
//!
//! This crate manages a containment tree of workspaces, projects, sprints,
//! columns, and tasks; enforces temporal consistency between a project's
//! bounds and its sprints; and supports two interactive editing protocols: a
//! draft/commit transaction model for timeline edits to sprint dates, and
//! ordered drag-and-drop reassignment of tasks between workflow columns.
//!
//! # Architecture
//!
//! Metronome follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! The crate is an embedded library: the presentation layer owns the store,
//! drives every operation synchronously, and re-renders from the returned
//! snapshots. Persistence, networking, and rendering are external
//! collaborators.

pub mod plan;
