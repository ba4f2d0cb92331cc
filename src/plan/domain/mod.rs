//! Domain model for hierarchical project scheduling.
//!
//! Entities form a strict containment tree: workspace → project → sprint →
//! column → task, each container owning its children exclusively. Entity
//! values expose no in-place mutation; every change is a whole-container
//! replacement, so a store revision behaves as an immutable snapshot that
//! supports cheap equality checks.

mod error;
mod ids;
mod interval;
mod project;
mod sprint;
mod task;
mod workspace;

pub use error::PlanDomainError;
pub use ids::{ColumnId, DraftSprintId, ProjectId, SprintId, SprintKey, TaskId, WorkspaceId};
pub use interval::DateInterval;
pub use project::{Project, sprint_placement_is_valid};
pub use sprint::{Column, ColumnStage, Sprint};
pub use task::{Label, Task};
pub use workspace::Workspace;
