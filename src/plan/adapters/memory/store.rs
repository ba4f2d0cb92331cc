//! In-memory canonical store.

use std::collections::HashMap;

use crate::plan::{
    domain::{Project, ProjectId, Workspace, WorkspaceId},
    ports::{PlanStore, PlanStoreError, PlanStoreResult},
};

/// Entity graph held entirely in process memory.
///
/// The store derives equality so tests can snapshot it (by clone) and assert
/// deep-equality after an operation that must leave it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryPlanStore {
    workspaces: HashMap<WorkspaceId, Workspace>,
}

impl InMemoryPlanStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanStore for InMemoryPlanStore {
    fn insert_workspace(&mut self, workspace: Workspace) -> PlanStoreResult<()> {
        if self.workspaces.contains_key(&workspace.id()) {
            return Err(PlanStoreError::DuplicateWorkspace(workspace.id()));
        }
        self.workspaces.insert(workspace.id(), workspace);
        Ok(())
    }

    fn workspace(&self, id: WorkspaceId) -> Option<&Workspace> {
        self.workspaces.get(&id)
    }

    fn remove_workspace(&mut self, id: WorkspaceId) -> PlanStoreResult<Workspace> {
        self.workspaces
            .remove(&id)
            .ok_or(PlanStoreError::WorkspaceNotFound(id))
    }

    fn insert_project(&mut self, workspace: WorkspaceId, project: Project) -> PlanStoreResult<()> {
        let owner = self
            .workspaces
            .remove(&workspace)
            .ok_or(PlanStoreError::WorkspaceNotFound(workspace))?;
        if owner.project(project.id()).is_some() {
            let id = project.id();
            self.workspaces.insert(workspace, owner);
            return Err(PlanStoreError::DuplicateProject(id));
        }
        self.workspaces.insert(workspace, owner.with_project(project));
        Ok(())
    }

    fn project(&self, workspace: WorkspaceId, project: ProjectId) -> Option<&Project> {
        self.workspaces.get(&workspace)?.project(project)
    }

    fn replace_project(&mut self, workspace: WorkspaceId, project: Project) -> PlanStoreResult<()> {
        let owner = self
            .workspaces
            .remove(&workspace)
            .ok_or(PlanStoreError::WorkspaceNotFound(workspace))?;
        if owner.project(project.id()).is_none() {
            let id = project.id();
            self.workspaces.insert(workspace, owner);
            return Err(PlanStoreError::ProjectNotFound(id));
        }
        self.workspaces.insert(workspace, owner.with_project(project));
        Ok(())
    }

    fn remove_project(
        &mut self,
        workspace: WorkspaceId,
        project: ProjectId,
    ) -> PlanStoreResult<Project> {
        let owner = self
            .workspaces
            .remove(&workspace)
            .ok_or(PlanStoreError::WorkspaceNotFound(workspace))?;
        let removed = owner.project(project).cloned();
        match removed {
            Some(found) => {
                self.workspaces.insert(workspace, owner.without_project(project));
                Ok(found)
            }
            None => {
                self.workspaces.insert(workspace, owner);
                Err(PlanStoreError::ProjectNotFound(project))
            }
        }
    }
}
