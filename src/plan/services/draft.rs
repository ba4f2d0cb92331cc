//! Draft sessions for staged timeline edits.
//!
//! A draft session accumulates pending sprint edits independently of the
//! canonical store. Staging performs no validation; constraint checks are
//! deferred to commit so the user can freely manipulate the draft and only
//! learns of violations at confirm time.

use std::sync::Arc;

use chrono::Days;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plan::domain::{DateInterval, DraftSprintId, PlanDomainError, SprintKey};

/// Number of days after the current day that a freshly staged sprint ends
/// on.
const DEFAULT_SPRINT_SPAN_DAYS: u64 = 7;

/// Classification of a draft entry, decided once at entry creation.
///
/// An entry created for a provisional key stays [`DraftKind::New`] no matter
/// how many times it is re-staged; it never flips to `Modified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftKind {
    /// The entry describes a sprint that does not exist in the store yet.
    New,
    /// The entry is a pending modification to an existing sprint.
    Modified,
}

/// Lifecycle phase of a draft session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    /// The session accepts staging calls.
    Editing,
    /// A commit has been requested and awaits external acknowledgement;
    /// staging is refused until the session is committed or cancelled.
    Pending,
}

/// Single staged edit, keyed by sprint identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEntry {
    key: SprintKey,
    title: String,
    desc: Option<String>,
    window: DateInterval,
    progress: u8,
    kind: DraftKind,
}

impl DraftEntry {
    /// Returns the sprint identity this entry edits.
    #[must_use]
    pub const fn key(&self) -> SprintKey {
        self.key
    }

    /// Returns the display title of the edited sprint.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the staged description, if any.
    #[must_use]
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    /// Returns the staged date window.
    #[must_use]
    pub const fn window(&self) -> DateInterval {
        self.window
    }

    /// Returns the staged completion percentage.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    /// Returns the entry classification.
    #[must_use]
    pub const fn kind(&self) -> DraftKind {
        self.kind
    }
}

/// Errors returned by draft session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The session is awaiting commit acknowledgement and refuses staging.
    #[error("draft session is pending commit; cancel or commit first")]
    SessionPending,

    /// Domain validation failed while building an entry.
    #[error(transparent)]
    Domain(#[from] PlanDomainError),
}

/// Accumulator of pending sprint edits for one project timeline.
///
/// At most one entry exists per sprint identity; re-staging the same key
/// overwrites the entry rather than accumulating history. Entries keep
/// their staging order, so review lists render deterministically.
pub struct DraftSession<C: Clock> {
    entries: Vec<DraftEntry>,
    phase: DraftPhase,
    clock: Arc<C>,
}

impl<C: Clock> DraftSession<C> {
    /// Creates an empty session in the editing phase.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self {
            entries: Vec::new(),
            phase: DraftPhase::Editing,
            clock,
        }
    }

    /// Returns the current session phase.
    #[must_use]
    pub const fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// Returns `true` when nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the staged entries in staging order.
    #[must_use]
    pub fn entries(&self) -> &[DraftEntry] {
        &self.entries
    }

    /// Returns the staged entries split into (`new`, `modified`) subsets for
    /// pre-commit review.
    #[must_use]
    pub fn partition_entries(&self) -> (Vec<&DraftEntry>, Vec<&DraftEntry>) {
        self.entries
            .iter()
            .partition(|entry| entry.kind() == DraftKind::New)
    }

    /// Stages a date change for the sprint identified by `key`.
    ///
    /// Upserts the entry: a provisional key keeps `DraftKind::New`, a
    /// committed key gets `DraftKind::Modified`; an existing entry keeps its
    /// original kind and progress. `title` is the display name carried into
    /// the review list (and, for new sprints, into the committed sprint).
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::SessionPending`] when the session is awaiting
    /// commit acknowledgement. Staging itself never validates the window
    /// against the project.
    pub fn stage_date_change(
        &mut self,
        key: SprintKey,
        title: impl Into<String>,
        window: DateInterval,
    ) -> Result<DraftEntry, DraftError> {
        self.ensure_editing()?;
        let staged_title = title.into();
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.title = staged_title;
            entry.window = window;
            return Ok(entry.clone());
        }

        let kind = if key.is_provisional() {
            DraftKind::New
        } else {
            DraftKind::Modified
        };
        let entry = DraftEntry {
            key,
            title: staged_title,
            desc: None,
            window,
            progress: 0,
            kind,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Stages a wholly new sprint with a provisional id and a default window
    /// of the current day through the current day plus seven.
    ///
    /// The created entry is returned so the caller can render the new bar
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::SessionPending`] when the session is awaiting
    /// commit acknowledgement, or a domain error when the title is empty.
    pub fn stage_new_sprint(
        &mut self,
        title: impl Into<String>,
        desc: Option<String>,
    ) -> Result<DraftEntry, DraftError> {
        self.ensure_editing()?;
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DraftError::Domain(PlanDomainError::EmptyTitle));
        }

        let today = self.clock.utc().date_naive();
        let end = today
            .checked_add_days(Days::new(DEFAULT_SPRINT_SPAN_DAYS))
            .unwrap_or(today);
        let window = DateInterval::new(today, end)?;

        let entry = DraftEntry {
            key: SprintKey::Provisional(DraftSprintId::new()),
            title: trimmed.to_owned(),
            desc,
            window,
            progress: 0,
            kind: DraftKind::New,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Records the completion percentage shown on the staged bar for `key`.
    ///
    /// A no-op when no entry is staged for `key`, since the caller's bar
    /// view may be stale.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::SessionPending`] when the session is awaiting
    /// commit acknowledgement, or
    /// [`PlanDomainError::InvalidProgress`] when `progress` exceeds 100.
    pub fn set_progress(&mut self, key: SprintKey, progress: u8) -> Result<(), DraftError> {
        self.ensure_editing()?;
        if progress > 100 {
            return Err(DraftError::Domain(PlanDomainError::InvalidProgress(
                progress,
            )));
        }
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.progress = progress;
        }
        Ok(())
    }

    /// Marks the session as awaiting commit acknowledgement.
    ///
    /// While pending, staging calls are refused; [`DraftSession::cancel`]
    /// abandons the window with the store untouched.
    pub fn mark_pending(&mut self) {
        self.phase = DraftPhase::Pending;
    }

    /// Cancels the session, discarding every entry.
    ///
    /// Equivalent to [`DraftSession::discard`]; defined for the pending
    /// window so that abandoning an in-flight confirmation is an explicit,
    /// race-free operation.
    pub fn cancel(&mut self) {
        self.discard();
    }

    /// Discards every staged entry and returns to the editing phase.
    ///
    /// Idempotent, and never touches the canonical store.
    pub fn discard(&mut self) {
        self.entries.clear();
        self.phase = DraftPhase::Editing;
    }

    fn ensure_editing(&self) -> Result<(), DraftError> {
        if self.phase == DraftPhase::Pending {
            return Err(DraftError::SessionPending);
        }
        Ok(())
    }
}
