use crate::domain::Board;
use crate::error::{Result, WorkspaceError};
use std::sync::Arc;

/// An immutable view of every board at one point in time
pub type Snapshot = Arc<Vec<Arc<Board>>>;

/// Holds the board list and the selected board.
///
/// The store is the only writer of board state. Each `update` publishes a new
/// [`Snapshot`]; anything not touched by the update stays shared with the
/// previous one, and readers holding an older snapshot keep seeing it.
#[derive(Debug, Clone)]
pub struct BoardStore {
    snapshot: Snapshot,
    selected: usize,
    version: u64,
}

impl BoardStore {
    pub fn new(boards: Vec<Board>) -> Self {
        Self {
            snapshot: Arc::new(boards.into_iter().map(Arc::new).collect()),
            selected: 0,
            version: 0,
        }
    }

    /// Current snapshot; cloning it is cheap
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.snapshot)
    }

    pub fn boards(&self) -> &[Arc<Board>] {
        &self.snapshot
    }

    pub fn selected_board_index(&self) -> usize {
        self.selected
    }

    pub fn selected_board(&self) -> Option<&Arc<Board>> {
        self.snapshot.get(self.selected)
    }

    pub fn select_board(&mut self, index: usize) -> Result<()> {
        if index >= self.snapshot.len() {
            return Err(WorkspaceError::BoardNotFound(index));
        }
        self.selected = index;
        Ok(())
    }

    /// Number of snapshots published since the store was created
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies `recipe` to a copy-on-write draft and publishes the result.
    ///
    /// Use `Arc::make_mut` on the draft's boards to edit them; boards left
    /// alone stay pointer-equal to the previous snapshot.
    pub fn update<F>(&mut self, recipe: F)
    where
        F: FnOnce(&mut Vec<Arc<Board>>),
    {
        let mut draft = (*self.snapshot).clone();
        recipe(&mut draft);
        self.snapshot = Arc::new(draft);
        self.version += 1;
        log::trace!("Published board snapshot v{}", self.version);
    }

    /// Like [`update`](Self::update), scoped to the selected board.
    ///
    /// Returns `None` without publishing when no board is selected.
    pub fn update_selected<F, T>(&mut self, recipe: F) -> Option<T>
    where
        F: FnOnce(&mut Board) -> T,
    {
        self.selected_board()?;
        let index = self.selected;
        let mut output = None;
        self.update(|boards| {
            if let Some(board) = boards.get_mut(index) {
                output = Some(recipe(Arc::make_mut(board)));
            }
        });
        output
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(vec![Board::default()])
    }
}
