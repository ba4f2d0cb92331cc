//! Integration tests for the draft/commit timeline editing protocol.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;

use metronome::plan::{
    domain::{Project, SprintKey},
    ports::PlanStore,
    services::{CommitOutcome, DraftSession, RejectionReason, commit},
};

use super::helpers::{ensure_schedule_consistent, interval, seeded_store};

fn session() -> DraftSession<DefaultClock> {
    DraftSession::new(Arc::new(DefaultClock))
}

#[rstest]
fn staged_sprints_become_canonical_only_on_commit() {
    let project = Project::new("Launch", None, interval(0, 30)).expect("valid project");
    let (mut store, workspace, project_id) = seeded_store(project);
    let mut draft = session();

    let staged = draft
        .stage_new_sprint("Iteration 1", None)
        .expect("staging succeeds while editing");
    draft
        .stage_date_change(staged.key(), "Iteration 1", interval(5, 10))
        .expect("staging succeeds while editing");

    // Reads of committed state remain valid while the draft is open.
    let visible = store
        .project(workspace, project_id)
        .expect("project is readable during drafting");
    assert!(visible.sprints().is_empty());

    let outcome = commit(&mut store, workspace, project_id, &mut draft)
        .expect("commit runs to completion");
    assert!(matches!(outcome, CommitOutcome::Applied { .. }));

    let committed = store
        .project(workspace, project_id)
        .expect("project survives commit");
    assert_eq!(committed.sprints().len(), 1);
    ensure_schedule_consistent(committed).expect("committed schedule is consistent");
}

#[rstest]
fn cancelling_a_pending_confirmation_leaves_the_store_untouched() {
    let project = Project::new("Launch", None, interval(0, 30)).expect("valid project");
    let (mut store, workspace, project_id) = seeded_store(project);
    let snapshot = store.clone();
    let mut draft = session();

    draft
        .stage_new_sprint("Iteration 1", None)
        .expect("staging succeeds while editing");
    draft
        .stage_new_sprint("Iteration 2", None)
        .expect("staging succeeds while editing");

    // Simulated slow confirmation: the session sits pending, then the user
    // backs out before the external operation resolves.
    draft.mark_pending();
    draft.cancel();

    assert_eq!(store, snapshot);
    assert!(draft.is_empty());
    let untouched = store
        .project(workspace, project_id)
        .expect("project still present");
    assert!(untouched.sprints().is_empty());
}

#[rstest]
fn successive_sessions_edit_committed_sprints_in_place() {
    let project = Project::new("Launch", None, interval(0, 30)).expect("valid project");
    let (mut store, workspace, project_id) = seeded_store(project);

    // Session one: create the sprint.
    let mut first = session();
    let staged = first
        .stage_new_sprint("Iteration 1", None)
        .expect("staging succeeds while editing");
    first
        .stage_date_change(staged.key(), "Iteration 1", interval(2, 8))
        .expect("staging succeeds while editing");
    let applied = commit(&mut store, workspace, project_id, &mut first)
        .expect("commit runs to completion");
    let CommitOutcome::Applied { id_map } = applied else {
        panic!("first session must apply");
    };
    let draft_id = staged.key().provisional().expect("new entry is provisional");
    let sprint_id = *id_map.get(&draft_id).expect("provisional id was mapped");

    // Session two: slide the committed sprint using its permanent id.
    let mut second = session();
    second
        .stage_date_change(
            SprintKey::Committed(sprint_id),
            "Iteration 1",
            interval(12, 18),
        )
        .expect("staging succeeds while editing");
    let outcome = commit(&mut store, workspace, project_id, &mut second)
        .expect("commit runs to completion");
    assert!(matches!(outcome, CommitOutcome::Applied { .. }));

    let committed = store
        .project(workspace, project_id)
        .expect("project survives commit");
    let sprint = committed.sprint(sprint_id).expect("sprint kept its id");
    assert_eq!(sprint.window(), interval(12, 18));
    ensure_schedule_consistent(committed).expect("committed schedule is consistent");
}

#[rstest]
fn conflicting_session_is_rejected_wholesale_and_stays_editable() {
    let project = Project::new("Launch", None, interval(0, 30)).expect("valid project");
    let (mut store, workspace, project_id) = seeded_store(project);
    let snapshot = store.clone();
    let mut draft = session();

    let first = draft
        .stage_new_sprint("Iteration 1", None)
        .expect("staging succeeds while editing");
    draft
        .stage_date_change(first.key(), "Iteration 1", interval(5, 10))
        .expect("staging succeeds while editing");
    let second = draft
        .stage_new_sprint("Iteration 2", None)
        .expect("staging succeeds while editing");
    draft
        .stage_date_change(second.key(), "Iteration 2", interval(8, 15))
        .expect("staging succeeds while editing");

    let outcome = commit(&mut store, workspace, project_id, &mut draft)
        .expect("commit runs to completion");
    let CommitOutcome::Rejected { reason, offenders } = outcome else {
        panic!("conflicting drafts must be rejected");
    };
    assert_eq!(reason, RejectionReason::PlacementConflict);
    assert_eq!(offenders.len(), 2);
    assert_eq!(store, snapshot);

    // The user corrects the second window and the session now applies.
    draft
        .stage_date_change(second.key(), "Iteration 2", interval(11, 15))
        .expect("rejected sessions stay editable");
    let corrected = commit(&mut store, workspace, project_id, &mut draft)
        .expect("commit runs to completion");
    assert!(matches!(corrected, CommitOutcome::Applied { .. }));
    let committed = store
        .project(workspace, project_id)
        .expect("project survives commit");
    assert_eq!(committed.sprints().len(), 2);
    ensure_schedule_consistent(committed).expect("committed schedule is consistent");
}
