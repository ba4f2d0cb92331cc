//! Atomic application of a draft session to the canonical store.
//!
//! Interval validity is relational: a sprint's legality depends on its
//! siblings. Applying entries one at a time would either reject spuriously
//! or expose transient invalid states, so the engine validates the whole
//! session first (including draft-against-draft conflicts) and then applies
//! everything in a single project replacement.

use std::collections::{HashMap, HashSet};

use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plan::{
    domain::{
        DraftSprintId, PlanDomainError, Project, ProjectId, Sprint, SprintId, SprintKey,
        WorkspaceId, sprint_placement_is_valid,
    },
    ports::{PlanStore, PlanStoreError},
    services::draft::{DraftEntry, DraftKind, DraftSession},
};

/// Why a session was rejected as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// At least one staged window escapes the project bounds or overlaps
    /// another sprint (committed or staged).
    PlacementConflict,
    /// A modification entry names a sprint no longer present in the project.
    UnknownSprint,
}

/// Result of committing a draft session.
///
/// Rejection is an expected, user-correctable outcome and therefore a value
/// rather than an error; the offending entries are carried so the caller can
/// highlight them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Every entry passed validation and the store now reflects the session.
    Applied {
        /// Mapping from each provisional id to the permanent id allocated at
        /// insert time. Callers still holding provisional references (for
        /// example tasks assigned to a not-yet-committed sprint) re-key
        /// through this map.
        id_map: HashMap<DraftSprintId, SprintId>,
    },
    /// No entry was applied.
    Rejected {
        /// Coarse classification of the failure.
        reason: RejectionReason,
        /// The entries that failed validation, in staging order.
        offenders: Vec<DraftEntry>,
    },
}

/// Errors that abort a commit outright.
///
/// These are not constraint violations (which surface as
/// [`CommitOutcome::Rejected`]) but hard faults: the addressed project is
/// gone or an entry could not be materialised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommitError {
    /// The canonical store rejected the read or write.
    #[error(transparent)]
    Store(#[from] PlanStoreError),

    /// An entry could not be turned into a sprint value.
    #[error(transparent)]
    Domain(#[from] PlanDomainError),
}

/// Applies `session` to the project atomically.
///
/// Validates every staged window against the committed sprints (a modified
/// sprint is excused from colliding with its own prior window) and
/// cross-validates staged windows against each other. If anything fails the
/// whole session is rejected and the store is untouched. On success all
/// modifications are applied, then all new sprints are inserted with fresh
/// permanent ids, the project is swapped into the store in one step, and the
/// session is cleared.
///
/// # Errors
///
/// Returns [`CommitError::Store`] when the project does not exist or the
/// replacement write fails, and [`CommitError::Domain`] when an entry cannot
/// be materialised as a sprint.
pub fn commit<S, C>(
    store: &mut S,
    workspace: WorkspaceId,
    project_id: ProjectId,
    session: &mut DraftSession<C>,
) -> Result<CommitOutcome, CommitError>
where
    S: PlanStore,
    C: Clock,
{
    let project = store
        .project(workspace, project_id)
        .ok_or(PlanStoreError::ProjectNotFound(project_id))?
        .clone();

    let entries: Vec<DraftEntry> = session.entries().to_vec();

    let unknown = unknown_sprint_offenders(&project, &entries);
    if !unknown.is_empty() {
        return Ok(CommitOutcome::Rejected {
            reason: RejectionReason::UnknownSprint,
            offenders: offenders_in_order(&entries, &unknown),
        });
    }

    let conflicts = placement_offenders(&project, &entries);
    if !conflicts.is_empty() {
        return Ok(CommitOutcome::Rejected {
            reason: RejectionReason::PlacementConflict,
            offenders: offenders_in_order(&entries, &conflicts),
        });
    }

    let (updated, id_map) = apply_entries(project, &entries)?;
    store.replace_project(workspace, updated)?;
    session.discard();
    Ok(CommitOutcome::Applied { id_map })
}

/// Collects keys of modification entries whose sprint has vanished.
fn unknown_sprint_offenders(project: &Project, entries: &[DraftEntry]) -> HashSet<SprintKey> {
    entries
        .iter()
        .filter(|entry| {
            entry
                .key()
                .committed()
                .is_some_and(|id| project.sprint(id).is_none())
        })
        .map(DraftEntry::key)
        .collect()
}

/// Collects keys of entries that fail placement, against the committed
/// sprints or against each other.
fn placement_offenders(project: &Project, entries: &[DraftEntry]) -> HashSet<SprintKey> {
    let mut offenders = HashSet::new();

    for entry in entries {
        if !sprint_placement_is_valid(project, entry.window(), entry.key().committed()) {
            offenders.insert(entry.key());
        }
    }

    // Two staged windows may conflict with one another before either
    // touches the store.
    for (index, left) in entries.iter().enumerate() {
        for right in entries.iter().skip(index.saturating_add(1)) {
            if left.window().overlaps(right.window()) {
                offenders.insert(left.key());
                offenders.insert(right.key());
            }
        }
    }

    offenders
}

/// Returns the offending entries in their original staging order.
fn offenders_in_order(entries: &[DraftEntry], offenders: &HashSet<SprintKey>) -> Vec<DraftEntry> {
    entries
        .iter()
        .filter(|entry| offenders.contains(&entry.key()))
        .cloned()
        .collect()
}

/// Applies all modification entries, then inserts all new sprints.
fn apply_entries(
    project: Project,
    entries: &[DraftEntry],
) -> Result<(Project, HashMap<DraftSprintId, SprintId>), CommitError> {
    let mut updated = project;
    let mut id_map = HashMap::new();

    for entry in entries.iter().filter(|e| e.kind() == DraftKind::Modified) {
        let Some(sprint_id) = entry.key().committed() else {
            continue;
        };
        if let Some(sprint) = updated.sprint(sprint_id) {
            let revised = sprint.clone().with_window(entry.window());
            updated = updated.with_updated_sprint(revised);
        }
    }

    for entry in entries.iter().filter(|e| e.kind() == DraftKind::New) {
        let Some(draft_id) = entry.key().provisional() else {
            continue;
        };
        let sprint = Sprint::new(
            entry.title(),
            entry.desc().map(str::to_owned),
            entry.window(),
        )?;
        id_map.insert(draft_id, sprint.id());
        updated = updated.with_sprint(sprint);
    }

    Ok((updated, id_map))
}
