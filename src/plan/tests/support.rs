//! Shared fixtures for planning engine tests.

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use crate::plan::{
    adapters::memory::InMemoryPlanStore,
    domain::{DateInterval, Project, ProjectId, Sprint, Task, Workspace, WorkspaceId},
    ports::PlanStore,
};

/// Clock pinned to a fixed instant so default windows are predictable.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// First day of the test calendar; `day(0)` maps here.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid test epoch")
}

/// Returns the clock pinned to midday on `day(0)`.
pub fn fixed_clock() -> FixedClock {
    let midday = epoch()
        .and_hms_opt(12, 0, 0)
        .expect("valid test clock time");
    FixedClock(Utc.from_utc_datetime(&midday))
}

/// Returns the `offset`-th day of the test calendar.
pub fn day(offset: u64) -> NaiveDate {
    epoch()
        .checked_add_days(Days::new(offset))
        .expect("offset within test calendar")
}

/// Builds an interval spanning `day(from)` through `day(to)`.
pub fn interval(from: u64, to: u64) -> DateInterval {
    DateInterval::new(day(from), day(to)).expect("valid test interval")
}

/// Builds a project spanning `day(from)` through `day(to)`.
pub fn project_spanning(from: u64, to: u64) -> Project {
    Project::new("Launch", None, interval(from, to)).expect("valid test project")
}

/// Builds an empty sprint spanning `day(from)` through `day(to)`.
pub fn sprint_spanning(title: &str, from: u64, to: u64) -> Sprint {
    Sprint::new(title, None, interval(from, to)).expect("valid test sprint")
}

/// Builds a task with the fixed clock.
pub fn task(title: &str) -> Task {
    Task::new(title, &fixed_clock()).expect("valid test task")
}

/// Seeds a store with one workspace holding `project`.
pub fn store_with_project(project: &Project) -> (InMemoryPlanStore, WorkspaceId, ProjectId) {
    let workspace = Workspace::new("Product").expect("valid test workspace");
    let workspace_id = workspace.id();
    let project_id = project.id();
    let mut store = InMemoryPlanStore::new();
    store
        .insert_workspace(workspace)
        .expect("workspace insert should succeed");
    store
        .insert_project(workspace_id, project.clone())
        .expect("project insert should succeed");
    (store, workspace_id, project_id)
}
