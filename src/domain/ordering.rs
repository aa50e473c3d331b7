//! Pure reducers that compute new column orderings.
//!
//! Each reducer takes the current column list and returns the next one, or
//! `None` when the operation would not change anything. Columns and tasks the
//! operation does not touch are shared with the input via `Arc`.

use crate::domain::board::{Column, ColumnId};
use crate::domain::task::{Task, TaskId};
use std::sync::Arc;

/// Moves the element at `from` to `to`, shifting the elements in between.
///
/// Out-of-range indices leave the order unchanged.
///
/// # Examples
/// ```
/// use kanban_workspace::domain::ordering::array_move;
///
/// assert_eq!(array_move(&[1, 2, 3], 0, 2), vec![2, 3, 1]);
/// assert_eq!(array_move(&[1, 2, 3], 2, 0), vec![3, 1, 2]);
/// ```
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from < moved.len() && to < moved.len() {
        let item = moved.remove(from);
        moved.insert(to, item);
    }
    moved
}

/// Reorders a column by moving `active` to the position currently held by `over`.
pub fn reorder_within_column(
    columns: &[Arc<Column>],
    column_id: ColumnId,
    active: &TaskId,
    over: &TaskId,
) -> Option<Vec<Arc<Column>>> {
    let column = columns.iter().find(|col| col.id == column_id)?;
    let from = column.task_position(active)?;
    let to = column.task_position(over)?;
    if from == to {
        return None;
    }

    let tasks = array_move(&column.tasks, from, to);
    Some(replace_tasks(columns, |col| {
        (col.id == column_id).then(|| tasks.clone())
    }))
}

/// Removes a task from `from` and appends it to the end of `to`.
///
/// Both columns must resolve and differ, and the task must be present in
/// `from`.
pub fn transfer_task(
    columns: &[Arc<Column>],
    task_id: &TaskId,
    from: ColumnId,
    to: ColumnId,
) -> Option<Vec<Arc<Column>>> {
    if from == to {
        return None;
    }
    let source = columns.iter().find(|col| col.id == from)?;
    let target = columns.iter().find(|col| col.id == to)?;
    let task: Arc<Task> = Arc::clone(source.task(task_id)?);

    let source_tasks: Vec<Arc<Task>> = source
        .tasks
        .iter()
        .filter(|t| &t.id != task_id)
        .cloned()
        .collect();
    let mut target_tasks = target.tasks.clone();
    target_tasks.push(task);

    Some(replace_tasks(columns, |col| {
        if col.id == to {
            Some(target_tasks.clone())
        } else if col.id == from {
            Some(source_tasks.clone())
        } else {
            None
        }
    }))
}

// Rebuilds only the columns `tasks_for` returns a task list for.
fn replace_tasks<F>(columns: &[Arc<Column>], mut tasks_for: F) -> Vec<Arc<Column>>
where
    F: FnMut(&Column) -> Option<Vec<Arc<Task>>>,
{
    columns
        .iter()
        .map(|col| match tasks_for(col) {
            Some(tasks) => Arc::new(Column {
                id: col.id,
                title: col.title.clone(),
                tasks,
            }),
            None => Arc::clone(col),
        })
        .collect()
}
