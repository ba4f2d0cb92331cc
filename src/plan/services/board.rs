//! Ordered drag-and-drop moves of tasks between workflow columns.
//!
//! Column moves are not draft-staged; they commit immediately. The reducer
//! itself is pure: it takes a sprint value and produces the next revision,
//! leaving the store write to [`apply_move`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plan::{
    domain::{Column, ColumnId, ProjectId, Sprint, SprintId, Task, TaskId, WorkspaceId},
    ports::{PlanStore, PlanStoreError},
};

/// One requested drag-and-drop transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    task: TaskId,
    source: ColumnId,
    dest: ColumnId,
    source_index: usize,
    dest_index: usize,
}

impl MoveRequest {
    /// Describes moving `task` from `source_index` in `source` to
    /// `dest_index` in `dest`.
    #[must_use]
    pub const fn new(
        task: TaskId,
        source: ColumnId,
        dest: ColumnId,
        source_index: usize,
        dest_index: usize,
    ) -> Self {
        Self {
            task,
            source,
            dest,
            source_index,
            dest_index,
        }
    }
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; the carried sprint is the next revision.
    Moved(Sprint),
    /// The request named a slot that does not hold the task (a stale read
    /// model); nothing changed.
    Stale,
}

/// Errors raised by board moves.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The task already exists in the destination column. This is an
    /// internal-consistency breach, never a user-correctable condition, so
    /// the operation halts rather than repairing state.
    #[error("task {task} is already present in column {column}")]
    DuplicatePlacement {
        /// The task named by the move.
        task: TaskId,
        /// The column that unexpectedly holds it.
        column: ColumnId,
    },

    /// The canonical store rejected the read or write.
    #[error(transparent)]
    Store(#[from] PlanStoreError),
}

/// Computes the sprint revision produced by one move.
///
/// Preconditions are checked defensively: if the source column is missing,
/// the destination column is missing, or the source slot does not hold the
/// named task, the move is a stale no-op rather than an error. The
/// destination index is clamped to the destination list length; same-column
/// moves remove before computing the insertion point so that dragging an
/// item past itself lands where the user dropped it. Total task count
/// across the sprint's columns is conserved by construction.
///
/// # Errors
///
/// Returns [`BoardError::DuplicatePlacement`] when the task is already in
/// the destination column, which would otherwise duplicate it.
pub fn move_task(sprint: &Sprint, request: MoveRequest) -> Result<MoveOutcome, BoardError> {
    let Some(source) = sprint.column(request.source) else {
        return Ok(MoveOutcome::Stale);
    };
    let slot_holds_task = source
        .tasks()
        .get(request.source_index)
        .is_some_and(|task| task.id() == request.task);
    if !slot_holds_task {
        return Ok(MoveOutcome::Stale);
    }
    let Some(dest) = sprint.column(request.dest) else {
        return Ok(MoveOutcome::Stale);
    };
    if request.dest != request.source && dest.holds(request.task) {
        return Err(BoardError::DuplicatePlacement {
            task: request.task,
            column: request.dest,
        });
    }

    let columns = if request.source == request.dest {
        reorder_within(sprint, source, request)
    } else {
        transfer_between(sprint, source, request)
    };
    Ok(MoveOutcome::Moved(sprint.clone().with_columns(columns)))
}

/// Rebuilds the column list for a same-column reorder.
fn reorder_within(sprint: &Sprint, source: &Column, request: MoveRequest) -> Vec<Column> {
    let mut tasks = source.tasks().to_vec();
    if request.source_index < tasks.len() {
        let task = tasks.remove(request.source_index);
        let slot = request.dest_index.min(tasks.len());
        tasks.insert(slot, task);
    }
    replace_columns(sprint, |column| {
        if column.id() == request.source {
            column.with_tasks(tasks.clone())
        } else {
            column
        }
    })
}

/// Rebuilds the column list for a cross-column transfer.
fn transfer_between(sprint: &Sprint, source: &Column, request: MoveRequest) -> Vec<Column> {
    let mut source_tasks = source.tasks().to_vec();
    let moved: Option<Task> = if request.source_index < source_tasks.len() {
        Some(source_tasks.remove(request.source_index))
    } else {
        None
    };
    replace_columns(sprint, |column| {
        if column.id() == request.source {
            column.with_tasks(source_tasks.clone())
        } else if column.id() == request.dest {
            let mut dest_tasks = column.tasks().to_vec();
            if let Some(task) = moved.clone() {
                let slot = request.dest_index.min(dest_tasks.len());
                dest_tasks.insert(slot, task);
            }
            column.with_tasks(dest_tasks)
        } else {
            column
        }
    })
}

/// Maps every column of the sprint through `f`, preserving order.
fn replace_columns(sprint: &Sprint, f: impl FnMut(Column) -> Column) -> Vec<Column> {
    sprint.columns().to_vec().into_iter().map(f).collect()
}

/// Applies a move against the canonical store.
///
/// Referential misses (unknown sprint, stale slot) are no-ops surfaced as
/// [`MoveOutcome::Stale`]; the successful outcome carries the committed
/// sprint revision.
///
/// # Errors
///
/// Returns [`BoardError::Store`] when the project does not exist or the
/// write fails, and propagates [`BoardError::DuplicatePlacement`] from the
/// reducer.
pub fn apply_move<S: PlanStore>(
    store: &mut S,
    workspace: WorkspaceId,
    project_id: ProjectId,
    sprint_id: SprintId,
    request: MoveRequest,
) -> Result<MoveOutcome, BoardError> {
    let project = store
        .project(workspace, project_id)
        .ok_or(PlanStoreError::ProjectNotFound(project_id))?
        .clone();
    let Some(sprint) = project.sprint(sprint_id) else {
        return Ok(MoveOutcome::Stale);
    };

    match move_task(sprint, request)? {
        MoveOutcome::Moved(revised) => {
            let updated = project.with_updated_sprint(revised.clone());
            store.replace_project(workspace, updated)?;
            Ok(MoveOutcome::Moved(revised))
        }
        MoveOutcome::Stale => Ok(MoveOutcome::Stale),
    }
}
