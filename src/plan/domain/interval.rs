//! Whole-day date intervals and the containment/overlap predicates used to
//! place sprints inside a project.

use super::PlanDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive interval of whole calendar days.
///
/// Both endpoints are occupied days, so two intervals that merely touch at a
/// shared boundary day still overlap. This closed-interval reading is
/// deliberate: a sprint ending on a day and another starting the same day
/// would both claim that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Creates an interval spanning `start` through `end`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`PlanDomainError::InvertedWindow`] when `end` precedes
    /// `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PlanDomainError> {
        if end < start {
            return Err(PlanDomainError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first occupied day.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the last occupied day.
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// Returns `true` when `inner` lies entirely within this interval.
    #[must_use]
    pub fn contains(self, inner: Self) -> bool {
        self.start <= inner.start && inner.end <= self.end
    }

    /// Returns `true` when the two intervals share at least one day.
    ///
    /// Touching at a single boundary day counts as overlap.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        !(self.end < other.start || self.start > other.end)
    }
}
