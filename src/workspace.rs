//! The workspace controller: turns drag gestures into board updates.

use crate::config::WorkspaceConfig;
use crate::domain::{reorder_within_column, transfer_task, Column, ColumnId};
use crate::drag::{DragEvent, DragHandler, DragItem, DragOutcome, DragSession, IgnoreReason};
use crate::error::{Result, WorkspaceError};
use crate::store::BoardStore;
use std::sync::Arc;

/// Drives the selected board of a [`BoardStore`] from drag events.
///
/// Moves across columns are applied optimistically while the task hovers a
/// different column and are never rolled back, even when the gesture is
/// cancelled.
#[derive(Debug, Default)]
pub struct Workspace {
    store: BoardStore,
    config: WorkspaceConfig,
    session: DragSession,
}

impl Workspace {
    pub fn new(store: BoardStore) -> Self {
        Self::with_config(store, WorkspaceConfig::default())
    }

    pub fn with_config(store: BoardStore, config: WorkspaceConfig) -> Self {
        Self {
            store,
            config,
            session: DragSession::Idle,
        }
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    pub fn into_store(self) -> BoardStore {
        self.store
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn session(&self) -> DragSession {
        self.session
    }

    /// Appends an empty column named after the current column count
    pub fn add_column(&mut self) -> Result<ColumnId> {
        let index = self.store.selected_board_index();
        let config = &self.config;
        let id = self
            .store
            .update_selected(|board| {
                let title = config.column_title(board.columns.len());
                board.append_column(title)
            })
            .ok_or(WorkspaceError::BoardNotFound(index))?;

        log::debug!("Added column {} to board #{}", id, index);
        Ok(id)
    }

    fn columns(&self) -> Option<&[Arc<Column>]> {
        self.store
            .selected_board()
            .map(|board| board.columns.as_slice())
    }

    fn commit(&mut self, columns: Vec<Arc<Column>>) {
        self.store.update_selected(|board| board.columns = columns);
    }

    /// Starts a session unless one is already running for the same task
    fn track_session(&mut self, active: &DragItem) {
        let Some(task) = active.task_id() else {
            return;
        };
        if let DragSession::Dragging { active: current, .. } = self.session {
            if current == task {
                return;
            }
            log::debug!("Drag of task {} superseded by task {}", current, task);
        }
        self.session = DragSession::Dragging {
            active: task,
            origin_column: active.column_id,
            optimistic_moves: 0,
        };
    }

    fn drop_task(&mut self, event: &DragEvent) -> DragOutcome {
        let Some(over) = event.over else {
            return ignore(IgnoreReason::NoDropTarget);
        };
        if event.active.id == over.id {
            return ignore(IgnoreReason::NoMovement);
        }
        let Some(task) = event.active.task_id() else {
            return ignore(IgnoreReason::NotATask);
        };
        let (Some(from), Some(to)) = (event.active.column_id, over.column_id) else {
            return ignore(IgnoreReason::MissingColumn);
        };
        let Some(columns) = self.columns() else {
            return ignore(IgnoreReason::NoBoardSelected);
        };
        let (Some(source), Some(_)) = (
            columns.iter().find(|col| col.id == from),
            columns.iter().find(|col| col.id == to),
        ) else {
            return ignore(IgnoreReason::UnresolvedColumn);
        };

        if from == to {
            let Some(old_index) = source.task_position(&task) else {
                return ignore(IgnoreReason::TaskNotFound);
            };
            let Some((over_task, new_index)) = over
                .task_id()
                .and_then(|id| source.task_position(&id).map(|index| (id, index)))
            else {
                return ignore(IgnoreReason::NoDropPosition);
            };
            let Some(next) = reorder_within_column(columns, from, &task, &over_task) else {
                return ignore(IgnoreReason::NoMovement);
            };

            self.commit(next);
            log::debug!(
                "Reordered task {} in column {}: {} -> {}",
                task,
                from,
                old_index,
                new_index
            );
            DragOutcome::Reordered {
                task,
                column: from,
                from: old_index,
                to: new_index,
            }
        } else {
            let Some(next) = transfer_task(columns, &task, from, to) else {
                return ignore(IgnoreReason::TaskNotFound);
            };

            self.commit(next);
            log::debug!("Moved task {} from column {} to {}", task, from, to);
            DragOutcome::Moved { task, from, to }
        }
    }
}

impl DragHandler for Workspace {
    fn on_drag_start(&mut self, active: &DragItem) {
        self.session = DragSession::Idle;
        self.track_session(active);
    }

    fn on_drag_over(&mut self, event: &DragEvent) -> DragOutcome {
        self.track_session(&event.active);

        let Some(over) = event.over else {
            return ignore(IgnoreReason::NoDropTarget);
        };
        let (Some(from), Some(to)) = (event.active.column_id, over.column_id) else {
            return ignore(IgnoreReason::MissingColumn);
        };
        if from == to {
            return ignore(IgnoreReason::SameColumn);
        }
        let Some(task) = event.active.task_id() else {
            return ignore(IgnoreReason::NotATask);
        };
        let Some(columns) = self.columns() else {
            return ignore(IgnoreReason::NoBoardSelected);
        };
        let source = match (
            columns.iter().find(|col| col.id == from),
            columns.iter().any(|col| col.id == to),
        ) {
            (Some(source), true) => source,
            _ => return ignore(IgnoreReason::UnresolvedColumn),
        };
        if source.task_position(&task).is_none() {
            return ignore(IgnoreReason::TaskNotFound);
        }
        let Some(next) = transfer_task(columns, &task, from, to) else {
            return ignore(IgnoreReason::TaskNotFound);
        };

        self.commit(next);
        if let DragSession::Dragging {
            optimistic_moves, ..
        } = &mut self.session
        {
            *optimistic_moves += 1;
        }
        log::debug!("Task {} hovering column {}, moved from {}", task, to, from);
        DragOutcome::Moved { task, from, to }
    }

    fn on_drag_end(&mut self, event: &DragEvent) -> DragOutcome {
        let outcome = self.drop_task(event);
        self.session = DragSession::Idle;
        outcome
    }

    fn on_drag_cancel(&mut self, active: &DragItem) -> DragOutcome {
        if let DragSession::Dragging {
            active: task,
            origin_column,
            optimistic_moves,
        } = self.session
        {
            if optimistic_moves > 0 {
                // Hover moves are kept; the board shows the task where it was last dragged.
                log::warn!(
                    "Drag of task {} cancelled after {} optimistic move(s); origin column {:?} not restored",
                    task,
                    optimistic_moves,
                    origin_column.map(|id| id.value())
                );
            }
        }
        self.on_drag_end(&DragEvent::new(*active, None))
    }
}

fn ignore(reason: IgnoreReason) -> DragOutcome {
    log::debug!("Ignoring drag event: {}", reason);
    DragOutcome::Ignored(reason)
}
