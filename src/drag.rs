//! Drag-and-drop event payloads and the callback seam for gesture tracking.
//!
//! The pointer/keyboard sensors and collision detection live outside this
//! crate. They report what is being dragged (`active`) and what it currently
//! hovers (`over`) through a [`DragHandler`].

use crate::domain::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a draggable or droppable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ItemId {
    Task(TaskId),
    Column(ColumnId),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => write!(f, "task {}", id),
            Self::Column(id) => write!(f, "column {}", id),
        }
    }
}

/// One side of a drag event: the item plus the column it reports belonging to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragItem {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
}

impl DragItem {
    pub fn task(id: TaskId, column_id: ColumnId) -> Self {
        Self {
            id: ItemId::Task(id),
            column_id: Some(column_id),
        }
    }

    /// A column drop zone; its column payload is itself
    pub fn column(id: ColumnId) -> Self {
        Self {
            id: ItemId::Column(id),
            column_id: Some(id),
        }
    }

    pub fn task_id(&self) -> Option<TaskId> {
        match self.id {
            ItemId::Task(id) => Some(id),
            ItemId::Column(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub active: DragItem,
    #[serde(default)]
    pub over: Option<DragItem>,
}

impl DragEvent {
    pub fn new(active: DragItem, over: Option<DragItem>) -> Self {
        Self { active, over }
    }
}

/// Why a drag callback left the board untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoDropTarget,
    NoMovement,
    NotATask,
    MissingColumn,
    SameColumn,
    UnresolvedColumn,
    TaskNotFound,
    NoDropPosition,
    NoBoardSelected,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoDropTarget => "no drop target",
            Self::NoMovement => "dropped onto itself",
            Self::NotATask => "active item is not a task",
            Self::MissingColumn => "column payload missing",
            Self::SameColumn => "source and target column are the same",
            Self::UnresolvedColumn => "column not on the board",
            Self::TaskNotFound => "task not found in source column",
            Self::NoDropPosition => "drop target has no position in the column",
            Self::NoBoardSelected => "no board selected",
        };
        f.write_str(text)
    }
}

/// Result of handling a drag callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The task changed columns
    Moved {
        task: TaskId,
        from: ColumnId,
        to: ColumnId,
    },
    /// The task changed position within its column
    Reordered {
        task: TaskId,
        column: ColumnId,
        from: usize,
        to: usize,
    },
    Ignored(IgnoreReason),
}

impl DragOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

/// Lifecycle of a single drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        active: TaskId,
        origin_column: Option<ColumnId>,
        /// Cross-column moves applied while hovering
        optimistic_moves: usize,
    },
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Callbacks invoked by an external gesture tracker.
///
/// `on_drag_over` fires repeatedly while hovering; exactly one of
/// `on_drag_end` or `on_drag_cancel` closes the gesture.
pub trait DragHandler {
    fn on_drag_start(&mut self, _active: &DragItem) {}

    fn on_drag_over(&mut self, event: &DragEvent) -> DragOutcome;

    fn on_drag_end(&mut self, event: &DragEvent) -> DragOutcome;

    /// An aborted gesture is a drop with no target.
    fn on_drag_cancel(&mut self, active: &DragItem) -> DragOutcome {
        self.on_drag_end(&DragEvent::new(*active, None))
    }
}
