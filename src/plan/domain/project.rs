//! Projects and the sprint-placement rule.

use super::{DateInterval, PlanDomainError, ProjectId, Sprint, SprintId};
use serde::{Deserialize, Serialize};

/// Bounded-duration container of non-overlapping sprints.
///
/// The order of the sprint list is a display concern; the enforced
/// invariants are only that every sprint window fits the project window and
/// that no two sprint windows overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    desc: Option<String>,
    window: DateInterval,
    sprints: Vec<Sprint>,
}

impl Project {
    /// Creates a project with no sprints.
    ///
    /// # Errors
    ///
    /// Returns [`PlanDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        desc: Option<String>,
        window: DateInterval,
    ) -> Result<Self, PlanDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PlanDomainError::EmptyTitle);
        }
        Ok(Self {
            id: ProjectId::new(),
            title: trimmed.to_owned(),
            desc,
            window,
            sprints: Vec::new(),
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description, if any.
    #[must_use]
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    /// Returns the date window the project spans.
    #[must_use]
    pub const fn window(&self) -> DateInterval {
        self.window
    }

    /// Returns the sprints of this project.
    #[must_use]
    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    /// Returns the sprint with the given id, if present.
    #[must_use]
    pub fn sprint(&self, id: SprintId) -> Option<&Sprint> {
        self.sprints.iter().find(|sprint| sprint.id() == id)
    }

    /// Returns a copy of this project with a sprint appended.
    #[must_use]
    pub fn with_sprint(mut self, sprint: Sprint) -> Self {
        self.sprints.push(sprint);
        self
    }

    /// Returns a copy of this project with its sprint list replaced.
    #[must_use]
    pub fn with_sprints(mut self, sprints: Vec<Sprint>) -> Self {
        self.sprints = sprints;
        self
    }

    /// Returns a copy of this project with the matching sprint replaced.
    ///
    /// When no sprint has the given id the project is returned unchanged.
    #[must_use]
    pub fn with_updated_sprint(mut self, sprint: Sprint) -> Self {
        if let Some(slot) = self.sprints.iter_mut().find(|s| s.id() == sprint.id()) {
            *slot = sprint;
        }
        self
    }

    /// Returns a copy of this project without the given sprint.
    ///
    /// Removal cascades by ownership: the sprint's columns and tasks go with
    /// it.
    #[must_use]
    pub fn without_sprint(mut self, id: SprintId) -> Self {
        self.sprints.retain(|sprint| sprint.id() != id);
        self
    }
}

/// Checks whether `candidate` is a legal window for a sprint of `project`.
///
/// The window must lie within the project bounds and must not overlap any
/// existing sprint other than `exclude` (the sprint's own prior window, when
/// re-validating a modification). This predicate is pure and is the sole
/// gate in front of every sprint create or commit.
#[must_use]
pub fn sprint_placement_is_valid(
    project: &Project,
    candidate: DateInterval,
    exclude: Option<SprintId>,
) -> bool {
    if !project.window().contains(candidate) {
        return false;
    }
    project
        .sprints()
        .iter()
        .filter(|sprint| exclude != Some(sprint.id()))
        .all(|sprint| !sprint.window().overlaps(candidate))
}
