//! # Kanban Workspace
//!
//! Board state and drag-and-drop reordering for kanban workspaces.
//!
//! Boards hold ordered columns and columns hold ordered tasks. A
//! [`Workspace`] owns the [`BoardStore`] and turns drag events from an
//! external gesture tracker into copy-on-write board snapshots, without
//! depending on any particular UI toolkit or storage backend.

pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod store;
pub mod workspace;

// Re-export commonly used types
pub use config::WorkspaceConfig;
pub use domain::{
    board::{Board, BoardId, Column, ColumnId},
    task::{Subtask, Task, TaskId},
};
pub use drag::{DragEvent, DragHandler, DragItem, DragOutcome, DragSession, IgnoreReason, ItemId};
pub use error::{Result, WorkspaceError};
pub use store::{BoardStore, Snapshot};
pub use workspace::Workspace;
