//! Workspaces, the top-level owners of projects.

use super::{PlanDomainError, Project, ProjectId, WorkspaceId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level unordered container of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    id: WorkspaceId,
    title: String,
    projects: HashMap<ProjectId, Project>,
}

impl Workspace {
    /// Creates a workspace with no projects.
    ///
    /// # Errors
    ///
    /// Returns [`PlanDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, PlanDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PlanDomainError::EmptyTitle);
        }
        Ok(Self {
            id: WorkspaceId::new(),
            title: trimmed.to_owned(),
            projects: HashMap::new(),
        })
    }

    /// Returns the workspace identifier.
    #[must_use]
    pub const fn id(&self) -> WorkspaceId {
        self.id
    }

    /// Returns the workspace title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project with the given id, if present.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Returns the number of projects in the workspace.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Returns a copy of this workspace with the given project inserted or
    /// replaced.
    #[must_use]
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.insert(project.id(), project);
        self
    }

    /// Returns a copy of this workspace without the given project.
    ///
    /// Removal cascades by ownership: the project's sprints and tasks go
    /// with it.
    #[must_use]
    pub fn without_project(mut self, id: ProjectId) -> Self {
        self.projects.remove(&id);
        self
    }
}
