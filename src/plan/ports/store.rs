//! Store port for the canonical entity graph.
//!
//! The engine never reaches for ambient state: the caller owns a store and
//! passes it by reference into each operation. All writes are whole-value
//! replacements, matching the snapshot-per-revision entity model.

use crate::plan::domain::{Project, ProjectId, Workspace, WorkspaceId};
use thiserror::Error;

/// Result type for store operations.
pub type PlanStoreResult<T> = Result<T, PlanStoreError>;

/// Canonical entity-graph contract.
///
/// Lookups return `Option` for referential misses because a caller's view
/// may be transiently stale; typed errors are reserved for writes that name
/// an entity which must exist.
pub trait PlanStore {
    /// Inserts a new workspace.
    ///
    /// # Errors
    ///
    /// Returns [`PlanStoreError::DuplicateWorkspace`] when the workspace id
    /// is already present.
    fn insert_workspace(&mut self, workspace: Workspace) -> PlanStoreResult<()>;

    /// Returns the workspace with the given id, if present.
    fn workspace(&self, id: WorkspaceId) -> Option<&Workspace>;

    /// Removes a workspace, cascading to its projects, sprints, and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`PlanStoreError::WorkspaceNotFound`] when no workspace has
    /// the given id.
    fn remove_workspace(&mut self, id: WorkspaceId) -> PlanStoreResult<Workspace>;

    /// Inserts a new project into a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`PlanStoreError::WorkspaceNotFound`] when the workspace does
    /// not exist, or [`PlanStoreError::DuplicateProject`] when the project id
    /// is already present.
    fn insert_project(&mut self, workspace: WorkspaceId, project: Project) -> PlanStoreResult<()>;

    /// Returns a project of a workspace, if both exist.
    fn project(&self, workspace: WorkspaceId, project: ProjectId) -> Option<&Project>;

    /// Replaces an existing project wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`PlanStoreError::WorkspaceNotFound`] or
    /// [`PlanStoreError::ProjectNotFound`] when the addressed entity does
    /// not exist.
    fn replace_project(&mut self, workspace: WorkspaceId, project: Project) -> PlanStoreResult<()>;

    /// Removes a project, cascading to its sprints and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`PlanStoreError::WorkspaceNotFound`] or
    /// [`PlanStoreError::ProjectNotFound`] when the addressed entity does
    /// not exist.
    fn remove_project(
        &mut self,
        workspace: WorkspaceId,
        project: ProjectId,
    ) -> PlanStoreResult<Project>;
}

/// Errors returned by store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanStoreError {
    /// The workspace was not found.
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    /// The project was not found.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// A workspace with the same identifier already exists.
    #[error("duplicate workspace identifier: {0}")]
    DuplicateWorkspace(WorkspaceId),

    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),
}
