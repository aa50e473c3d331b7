use crate::domain::task::{Task, TaskId};
use crate::error::{Result, WorkspaceError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};
use uuid::Uuid;

/// Unique identifier for a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(Uuid);

impl BoardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a column: the creation timestamp in milliseconds.
///
/// Only unique within the board that generated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(i64);

impl ColumnId {
    pub const fn new(token: i64) -> Self {
        Self(token)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Generates a timestamp id, bumping past any id in `taken`
    pub fn generate(taken: &[ColumnId]) -> Self {
        let mut token = Utc::now().timestamp_millis();
        while taken.iter().any(|id| id.0 == token) {
            token += 1;
        }
        Self(token)
    }
}

impl FromStr for ColumnId {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| WorkspaceError::InvalidColumnId(s.to_string()))
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered list of tasks with a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Arc<Task>>,
}

impl Column {
    pub fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks.into_iter().map(Arc::new));
        self
    }

    /// Index of a task within this column
    pub fn task_position(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == task_id)
    }

    pub fn task(&self, task_id: &TaskId) -> Option<&Arc<Task>> {
        self.tasks.iter().find(|task| &task.id == task_id)
    }

    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// A kanban board: an ordered list of columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Arc<Column>>,
}

impl Board {
    pub fn new(title: String) -> Self {
        Self {
            id: BoardId::new(),
            title,
            columns: Vec::new(),
        }
    }

    /// Appends an empty column with a freshly generated id
    pub fn append_column(&mut self, title: String) -> ColumnId {
        let taken: Vec<ColumnId> = self.columns.iter().map(|col| col.id).collect();
        let id = ColumnId::generate(&taken);
        self.columns.push(Arc::new(Column::new(id, title)));
        id
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(Arc::new(column));
    }

    /// Appends a task to the end of a column
    pub fn push_task(&mut self, column_id: ColumnId, task: Task) -> Result<()> {
        let column = self
            .columns
            .iter_mut()
            .find(|col| col.id == column_id)
            .ok_or(WorkspaceError::ColumnNotFound(column_id))?;
        Arc::make_mut(column).tasks.push(Arc::new(task));
        Ok(())
    }

    /// First column carrying `id`
    pub fn column(&self, id: ColumnId) -> Option<&Arc<Column>> {
        self.columns.iter().find(|col| col.id == id)
    }

    pub fn column_position(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| col.id == id)
    }

    /// All task ids in display order, column by column
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.columns
            .iter()
            .flat_map(|col| col.tasks.iter().map(|task| task.id))
            .collect()
    }

    /// Finds the column currently holding a task
    pub fn locate_task(&self, task_id: &TaskId) -> Option<ColumnId> {
        self.columns
            .iter()
            .find(|col| col.task_position(task_id).is_some())
            .map(|col| col.id)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|col| col.len()).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Self::new("Default Board".to_string());
        for title in ["Todo", "Doing", "Done"] {
            board.append_column(title.to_string());
        }
        board
    }
}
