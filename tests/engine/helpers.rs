//! Shared fixtures and assertion helpers for engine integration tests.

use chrono::{Days, NaiveDate};

use metronome::plan::{
    adapters::memory::InMemoryPlanStore,
    domain::{DateInterval, Project, ProjectId, Workspace, WorkspaceId},
    ports::PlanStore,
};

/// First day of the test calendar.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid test epoch")
}

/// Builds an interval spanning day `from` through day `to` of the test
/// calendar.
pub fn interval(from: u64, to: u64) -> DateInterval {
    let start = epoch()
        .checked_add_days(Days::new(from))
        .expect("offset within test calendar");
    let end = epoch()
        .checked_add_days(Days::new(to))
        .expect("offset within test calendar");
    DateInterval::new(start, end).expect("valid test interval")
}

/// Seeds a store with one workspace holding `project`.
pub fn seeded_store(project: Project) -> (InMemoryPlanStore, WorkspaceId, ProjectId) {
    let workspace = Workspace::new("Product").expect("valid test workspace");
    let workspace_id = workspace.id();
    let project_id = project.id();
    let mut store = InMemoryPlanStore::new();
    store
        .insert_workspace(workspace)
        .expect("workspace insert should succeed");
    store
        .insert_project(workspace_id, project)
        .expect("project insert should succeed");
    (store, workspace_id, project_id)
}

/// Asserts that every sprint of `project` fits its bounds and that no two
/// sprint windows overlap.
///
/// # Errors
///
/// Returns an error naming the first violation found.
pub fn ensure_schedule_consistent(project: &Project) -> Result<(), eyre::Report> {
    for sprint in project.sprints() {
        eyre::ensure!(
            project.window().contains(sprint.window()),
            "sprint '{}' escapes the project bounds",
            sprint.title()
        );
    }
    for (index, left) in project.sprints().iter().enumerate() {
        for right in project.sprints().iter().skip(index + 1) {
            eyre::ensure!(
                !left.window().overlaps(right.window()),
                "sprints '{}' and '{}' overlap",
                left.title(),
                right.title()
            );
        }
    }
    Ok(())
}
