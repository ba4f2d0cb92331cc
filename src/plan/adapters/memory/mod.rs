//! In-memory adapter for the canonical store port.

mod store;

pub use store::InMemoryPlanStore;
