//! Board, column and task domain model.
//!
//! # Responsibility
//! - Define the canonical board shape shared by store, services and drag
//!   coordination.
//! - Provide pure query helpers used by mutation transforms.
//!
//! # Invariants
//! - A task belongs to exactly one column; move transforms must never leave
//!   it observable in zero or two columns.
//! - Column order and per-column task order are meaningful (append order).
//! - Ids are unique board-wide, not merely per column.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Either a gateway-minted id (stringified) or a locally minted token.
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = String;

/// Stable identifier for a column.
pub type ColumnId = String;

/// One card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Freeform non-empty text after trim.
    pub title: String,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Named, colored lane owning an ordered sequence of tasks.
///
/// `color`/`dark_color` are presentation attributes carried verbatim; they
/// have no effect on ordering or business logic and are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub color: String,
    /// Serialized as `darkColor` to match the external wire naming.
    #[serde(rename = "darkColor")]
    pub dark_color: String,
    /// Append-ordered; determines render order and drop position semantics.
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        color: impl Into<String>,
        dark_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            dark_color: dark_color.into(),
            tasks: Vec::new(),
        }
    }

    /// Finds a task by id within this column.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn has_task(&self, task_id: &str) -> bool {
        self.task(task_id).is_some()
    }
}

/// The whole board: an ordered, user-reorderable sequence of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates an empty board (the session-start state before hydration).
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a column by id.
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    /// Position of a column in the sequence.
    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == column_id)
    }

    /// Finds a task by id within a specific column.
    pub fn task_in_column(&self, task_id: &str, column_id: &str) -> Option<&Task> {
        self.column(column_id).and_then(|column| column.task(task_id))
    }

    /// Total task count across all columns.
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }
}

/// Kind of item a drag gesture carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Task,
    Column,
}

/// Transient description of the single item currently being dragged.
///
/// Lives only for one gesture; cleared unconditionally at drag end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DragKind,
}

/// Normalizes a user-supplied title.
///
/// Returns `None` when the title is blank after trim; blank titles are a
/// silent validation no-op for every title-accepting operation.
pub fn normalized_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Mints a locally-unique task id.
///
/// Used only when the gateway did not supply a usable id of its own.
pub fn mint_task_id() -> TaskId {
    format!("task-{}", Uuid::new_v4())
}

/// Mints a locally-unique column id.
pub fn mint_column_id() -> ColumnId {
    format!("column-{}", Uuid::new_v4())
}
