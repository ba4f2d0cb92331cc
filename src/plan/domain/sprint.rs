//! Sprints and their workflow columns.
//!
//! The columnar board is the canonical shape of a sprint; the flat task list
//! some call sites want is derived on demand via [`Sprint::backlog`] and can
//! be turned back into a board with [`Sprint::with_backlog`], which seeds
//! the to-do column.

use super::{ColumnId, DateInterval, PlanDomainError, SprintId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Workflow stage represented by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStage {
    /// Work not yet started; the only stage that accepts newly created tasks.
    Todo,
    /// Work underway.
    InProgress,
    /// Work finished.
    Done,
}

impl ColumnStage {
    /// The fixed column order every sprint is created with.
    pub const ORDER: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the display title for a column of this stage.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To do",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    /// Returns `true` for the stage that accepts new task creation.
    #[must_use]
    pub const fn is_todo(self) -> bool {
        matches!(self, Self::Todo)
    }
}

/// Ordered bucket of tasks at one workflow stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    stage: ColumnStage,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column for the given stage.
    #[must_use]
    pub fn new(stage: ColumnStage) -> Self {
        Self {
            id: ColumnId::new(),
            stage,
            title: stage.title().to_owned(),
            tasks: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the workflow stage this column represents.
    #[must_use]
    pub const fn stage(&self) -> ColumnStage {
        self.stage
    }

    /// Returns the column display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tasks in column order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns `true` when the column holds a task with the given id.
    #[must_use]
    pub fn holds(&self, task: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id() == task)
    }

    /// Returns a copy of this column with its task list replaced.
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }
}

/// Time-boxed sub-interval of a project holding tasks grouped by workflow
/// stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    id: SprintId,
    title: String,
    desc: Option<String>,
    window: DateInterval,
    columns: Vec<Column>,
}

impl Sprint {
    /// Creates a sprint with empty columns in the fixed stage order.
    ///
    /// # Errors
    ///
    /// Returns [`PlanDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        desc: Option<String>,
        window: DateInterval,
    ) -> Result<Self, PlanDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PlanDomainError::EmptyTitle);
        }
        Ok(Self {
            id: SprintId::new(),
            title: trimmed.to_owned(),
            desc,
            window,
            columns: ColumnStage::ORDER.into_iter().map(Column::new).collect(),
        })
    }

    /// Creates a sprint from a flat task list, seeding the to-do column.
    ///
    /// This is the inverse of [`Sprint::backlog`] for sprints whose work has
    /// not yet been spread across stages.
    ///
    /// # Errors
    ///
    /// Returns [`PlanDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn with_backlog(
        title: impl Into<String>,
        desc: Option<String>,
        window: DateInterval,
        tasks: Vec<Task>,
    ) -> Result<Self, PlanDomainError> {
        let sprint = Self::new(title, desc, window)?;
        let mut seed = Some(tasks);
        let columns = sprint
            .columns
            .into_iter()
            .map(|column| {
                if column.stage().is_todo() {
                    column.with_tasks(seed.take().unwrap_or_default())
                } else {
                    column
                }
            })
            .collect();
        Ok(Self { columns, ..sprint })
    }

    /// Returns the sprint identifier.
    #[must_use]
    pub const fn id(&self) -> SprintId {
        self.id
    }

    /// Returns the sprint title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the sprint description, if any.
    #[must_use]
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    /// Returns the date window the sprint occupies.
    #[must_use]
    pub const fn window(&self) -> DateInterval {
        self.window
    }

    /// Returns the columns in their fixed stage order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given id, if present.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Returns the single column that accepts new tasks.
    #[must_use]
    pub fn todo_column(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.stage().is_todo())
    }

    /// Returns the derived flat view of every task, in column order.
    #[must_use]
    pub fn backlog(&self) -> Vec<&Task> {
        self.columns
            .iter()
            .flat_map(|column| column.tasks().iter())
            .collect()
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks().len()).sum()
    }

    /// Returns a copy of this sprint with its date window replaced.
    #[must_use]
    pub const fn with_window(mut self, window: DateInterval) -> Self {
        self.window = window;
        self
    }

    /// Returns a copy of this sprint with its columns replaced.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }
}
