//! Error types for planning domain validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain planning values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanDomainError {
    /// The end of a date window precedes its start.
    #[error("window end {end} precedes start {start}")]
    InvertedWindow {
        /// Requested first day of the window.
        start: NaiveDate,
        /// Requested last day of the window.
        end: NaiveDate,
    },

    /// A title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// A progress value exceeds 100 percent.
    #[error("progress {0} exceeds 100 percent")]
    InvalidProgress(u8),
}
