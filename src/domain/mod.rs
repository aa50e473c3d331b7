pub mod board;
pub mod ordering;
pub mod task;

pub use board::{Board, BoardId, Column, ColumnId};
pub use ordering::{array_move, reorder_within_column, transfer_task};
pub use task::{Subtask, Task, TaskId};
