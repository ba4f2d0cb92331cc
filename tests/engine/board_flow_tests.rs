//! Integration tests for drag-and-drop board moves.

use mockable::DefaultClock;
use rstest::rstest;

use metronome::plan::{
    domain::{ColumnId, ColumnStage, Project, Sprint, Task},
    ports::PlanStore,
    services::{MoveOutcome, MoveRequest, apply_move},
};

use super::helpers::{interval, seeded_store};

fn stage_column(sprint: &Sprint, stage: ColumnStage) -> ColumnId {
    sprint
        .columns()
        .iter()
        .find(|column| column.stage() == stage)
        .map(|column| column.id())
        .expect("sprint has all three stages")
}

fn column_titles(sprint: &Sprint, stage: ColumnStage) -> Vec<String> {
    sprint
        .columns()
        .iter()
        .filter(|column| column.stage() == stage)
        .flat_map(|column| column.tasks().iter().map(|t| t.title().to_owned()))
        .collect()
}

#[rstest]
fn tasks_travel_across_the_board_and_the_count_is_conserved() {
    let clock = DefaultClock;
    let tasks: Vec<Task> = ["Design", "Build", "Review"]
        .into_iter()
        .map(|title| Task::new(title, &clock).expect("valid task"))
        .collect();
    let ids: Vec<_> = tasks.iter().map(Task::id).collect();
    let sprint = Sprint::with_backlog("Iteration 1", None, interval(0, 6), tasks)
        .expect("backlog sprint is valid");
    let sprint_id = sprint.id();
    let todo = stage_column(&sprint, ColumnStage::Todo);
    let doing = stage_column(&sprint, ColumnStage::InProgress);
    let done = stage_column(&sprint, ColumnStage::Done);

    let project = Project::new("Launch", None, interval(0, 30))
        .expect("valid project")
        .with_sprint(sprint);
    let (mut store, workspace, project_id) = seeded_store(project);

    // Walk "Design" through every stage, then promote "Review" directly.
    let moves = [
        MoveRequest::new(ids[0], todo, doing, 0, 0),
        MoveRequest::new(ids[0], doing, done, 0, 0),
        MoveRequest::new(ids[2], todo, done, 1, 0),
    ];
    for request in moves {
        let outcome = apply_move(&mut store, workspace, project_id, sprint_id, request)
            .expect("well-formed move succeeds");
        assert!(matches!(outcome, MoveOutcome::Moved(_)));

        let current = store
            .project(workspace, project_id)
            .and_then(|p| p.sprint(sprint_id))
            .expect("sprint survives moves");
        assert_eq!(current.task_count(), 3);
    }

    let final_state = store
        .project(workspace, project_id)
        .and_then(|p| p.sprint(sprint_id))
        .expect("sprint survives moves");
    assert_eq!(column_titles(final_state, ColumnStage::Todo), vec!["Build"]);
    assert!(column_titles(final_state, ColumnStage::InProgress).is_empty());
    assert_eq!(
        column_titles(final_state, ColumnStage::Done),
        vec!["Review", "Design"]
    );
}

#[rstest]
fn a_stale_drag_leaves_the_board_untouched() {
    let clock = DefaultClock;
    let only = Task::new("Design", &clock).expect("valid task");
    let only_id = only.id();
    let sprint = Sprint::with_backlog("Iteration 1", None, interval(0, 6), vec![only])
        .expect("backlog sprint is valid");
    let sprint_id = sprint.id();
    let todo = stage_column(&sprint, ColumnStage::Todo);
    let done = stage_column(&sprint, ColumnStage::Done);

    let project = Project::new("Launch", None, interval(0, 30))
        .expect("valid project")
        .with_sprint(sprint);
    let (mut store, workspace, project_id) = seeded_store(project);
    let snapshot = store.clone();

    // The view claims the task sits at index 1, but it sits at index 0.
    let outcome = apply_move(
        &mut store,
        workspace,
        project_id,
        sprint_id,
        MoveRequest::new(only_id, todo, done, 1, 0),
    )
    .expect("stale move is not an error");

    assert_eq!(outcome, MoveOutcome::Stale);
    assert_eq!(store, snapshot);
}
