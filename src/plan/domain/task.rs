//! Task cards and their labels.

use super::{PlanDomainError, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Short categorisation tag attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Creates a validated label.
    ///
    /// # Errors
    ///
    /// Returns [`PlanDomainError::EmptyTitle`] when the label is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PlanDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PlanDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unit of work owned by exactly one workflow column at a time.
///
/// Tasks carry no back-reference to their column; ownership is expressed
/// solely by which column's task list holds them, so transferring a task is
/// a whole-list replacement on both columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    desc: Option<String>,
    added_at: DateTime<Utc>,
    due_date: Option<NaiveDate>,
    completed_at: Option<DateTime<Utc>>,
    labels: Vec<Label>,
}

impl Task {
    /// Creates a new task stamped with the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`PlanDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>, clock: &impl Clock) -> Result<Self, PlanDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PlanDomainError::EmptyTitle);
        }
        Ok(Self {
            id: TaskId::new(),
            title: trimmed.to_owned(),
            desc: None,
            added_at: clock.utc(),
            due_date: None,
            completed_at: None,
            labels: Vec::new(),
        })
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the task labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Returns a copy of this task marked completed at the clock's current
    /// time.
    #[must_use]
    pub fn completed(mut self, clock: &impl Clock) -> Self {
        self.completed_at = Some(clock.utc());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    /// Returns the timestamp at which the task was created.
    #[must_use]
    pub const fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Returns the task due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the completion timestamp, if the task is done.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the task labels.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}
