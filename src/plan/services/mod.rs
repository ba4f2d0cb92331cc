//! Application services for timeline drafting, commit, and board moves.

pub mod board;
pub mod commit;
pub mod draft;

pub use board::{BoardError, MoveOutcome, MoveRequest, apply_move, move_task};
pub use commit::{CommitError, CommitOutcome, RejectionReason, commit};
pub use draft::{DraftEntry, DraftError, DraftKind, DraftPhase, DraftSession};
