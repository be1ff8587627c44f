//! Board service and the board detail view.

use super::{
    audit::ActionRecorder,
    error::{KanbanError, KanbanResult},
    lists::{load_lists_with_tasks, ListWithTasks},
};
use crate::kanban::{
    domain::{Board, BoardId},
    ports::KanbanStore,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// A board with its lists and their tasks, all sorted by order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDetails {
    board: Board,
    lists: Vec<ListWithTasks>,
}

impl BoardDetails {
    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board's lists sorted by order.
    #[must_use]
    pub fn lists(&self) -> &[ListWithTasks] {
        &self.lists
    }

    /// Splits the view into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Board, Vec<ListWithTasks>) {
        (self.board, self.lists)
    }
}

/// Board management service.
#[derive(Clone)]
pub struct BoardService<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    recorder: ActionRecorder<C>,
}

impl<S, C> BoardService<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            recorder: ActionRecorder::new(clock),
        }
    }

    /// Returns every board in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::Store`] when the read fails.
    pub async fn list_boards(&self) -> KanbanResult<Vec<Board>> {
        self.store.transaction(|tx| Ok(tx.boards()?)).await
    }

    /// Returns a board with its lists and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::BoardNotFound`] when the board does not exist,
    /// or [`KanbanError::Store`] when a read fails.
    pub async fn get_board(&self, id: BoardId) -> KanbanResult<BoardDetails> {
        self.store
            .transaction(move |tx| {
                let board = tx.find_board(id)?.ok_or(KanbanError::BoardNotFound(id))?;
                let lists = load_lists_with_tasks(tx, id)?;
                Ok(BoardDetails { board, lists })
            })
            .await
    }

    /// Creates a board.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::Store`] when the insert or the audit append
    /// fails; nothing is persisted in that case.
    pub async fn create_board(&self, title: impl Into<String>) -> KanbanResult<Board> {
        let recorder = self.recorder.clone();
        let board = Board::new(title);
        self.store
            .transaction(move |tx| {
                tx.insert_board(&board)?;
                recorder.record_in(tx, format!("User created the board {}", board.title()))?;
                Ok(board)
            })
            .await
            .inspect(|board| info!(board_id = %board.id(), "board created"))
            .inspect_err(|err| warn!(error = %err, "board creation failed"))
    }

    /// Renames a board.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::BoardNotFound`] when the board does not exist,
    /// or the store error of a failed write.
    pub async fn update_board(&self, id: BoardId, title: impl Into<String>) -> KanbanResult<Board> {
        let recorder = self.recorder.clone();
        let new_title = title.into();
        self.store
            .transaction(move |tx| {
                let mut board = tx.find_board(id)?.ok_or(KanbanError::BoardNotFound(id))?;
                board.rename(new_title);
                tx.update_board(&board)?;
                recorder.record_in(
                    tx,
                    format!("User updated the board title to {}", board.title()),
                )?;
                Ok(board)
            })
            .await
            .inspect(|_| info!(board_id = %id, "board renamed"))
            .inspect_err(|err| warn!(board_id = %id, error = %err, "board rename failed"))
    }

    /// Deletes a board with all of its lists and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanError::BoardNotFound`] when the board does not exist,
    /// or the store error of a failed write.
    pub async fn delete_board(&self, id: BoardId) -> KanbanResult<Board> {
        let recorder = self.recorder.clone();
        self.store
            .transaction(move |tx| {
                let board = tx.find_board(id)?.ok_or(KanbanError::BoardNotFound(id))?;
                tx.delete_board(id)?;
                recorder.record_in(tx, format!("User deleted the board {}", board.title()))?;
                Ok(board)
            })
            .await
            .inspect(|_| info!(board_id = %id, "board deleted"))
            .inspect_err(|err| warn!(board_id = %id, error = %err, "board deletion failed"))
    }
}
