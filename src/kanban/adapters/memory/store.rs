//! In-memory kanban store with all-or-nothing transactions.
//!
//! Each transaction works on a copy of the committed tables and swaps the
//! copy in only when the unit of work succeeds. Transactions are serialized
//! behind a single write lock.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::kanban::{
    domain::{ActionLogEntry, Board, BoardId, List, ListId, Position, Task, TaskId},
    ports::{KanbanStore, KanbanTransaction, StoreError, StoreResult},
};

/// Thread-safe in-memory kanban store.
///
/// Rows live in insertion-ordered tables, so siblings sharing an order value
/// sort by creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKanbanStore {
    state: Arc<RwLock<InMemoryKanbanState>>,
    reject_action_appends: Arc<AtomicBool>,
}

#[derive(Debug, Clone, Default)]
struct InMemoryKanbanState {
    boards: Vec<Board>,
    lists: Vec<List>,
    tasks: Vec<Task>,
    actions: Vec<ActionLogEntry>,
}

impl InMemoryKanbanStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent action log append fail with a persistence
    /// error, or restores normal behaviour when `reject` is `false`.
    ///
    /// Used to verify that a failed audit write rolls back the mutation it
    /// documents.
    pub fn reject_action_log_appends(&self, reject: bool) {
        self.reject_action_appends.store(reject, Ordering::SeqCst);
    }
}

#[async_trait]
impl KanbanStore for InMemoryKanbanStore {
    async fn transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn KanbanTransaction) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<StoreError> + Send + 'static,
    {
        let mut committed = self.state.write().map_err(|err| {
            E::from(StoreError::persistence(std::io::Error::other(
                err.to_string(),
            )))
        })?;

        let mut working = InMemoryTransaction {
            state: committed.clone(),
            reject_action_appends: self.reject_action_appends.load(Ordering::SeqCst),
        };
        let output = work(&mut working)?;
        *committed = working.state;
        Ok(output)
    }
}

struct InMemoryTransaction {
    state: InMemoryKanbanState,
    reject_action_appends: bool,
}

fn sorted_by_position<T>(rows: impl Iterator<Item = T>, position: fn(&T) -> Position) -> Vec<T> {
    let mut children: Vec<T> = rows.collect();
    // Stable sort keeps insertion order between equal positions.
    children.sort_by_key(position);
    children
}

fn duplicate_key(table: &str, id: impl std::fmt::Display) -> StoreError {
    StoreError::ConstraintViolation(format!("duplicate key in {table}: {id}"))
}

fn missing_parent(table: &str, parent: &str, id: impl std::fmt::Display) -> StoreError {
    StoreError::ConstraintViolation(format!("{table} references missing {parent} {id}"))
}

impl InMemoryTransaction {
    fn board_exists(&self, id: BoardId) -> bool {
        self.state.boards.iter().any(|board| board.id() == id)
    }

    fn list_exists(&self, id: ListId) -> bool {
        self.state.lists.iter().any(|list| list.id() == id)
    }

    fn list_mut(&mut self, id: ListId) -> StoreResult<&mut List> {
        self.state
            .lists
            .iter_mut()
            .find(|list| list.id() == id)
            .ok_or_else(|| StoreError::row_not_found("lists", id))
    }

    fn task_mut(&mut self, id: TaskId) -> StoreResult<&mut Task> {
        self.state
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| StoreError::row_not_found("tasks", id))
    }

    fn remove_tasks_of(&mut self, list_ids: &[ListId]) {
        self.state
            .tasks
            .retain(|task| !list_ids.contains(&task.list_id()));
    }
}

impl KanbanTransaction for InMemoryTransaction {
    fn boards(&mut self) -> StoreResult<Vec<Board>> {
        Ok(self.state.boards.clone())
    }

    fn find_board(&mut self, id: BoardId) -> StoreResult<Option<Board>> {
        Ok(self
            .state
            .boards
            .iter()
            .find(|board| board.id() == id)
            .cloned())
    }

    fn insert_board(&mut self, board: &Board) -> StoreResult<()> {
        if self.board_exists(board.id()) {
            return Err(duplicate_key("boards", board.id()));
        }
        self.state.boards.push(board.clone());
        Ok(())
    }

    fn update_board(&mut self, board: &Board) -> StoreResult<()> {
        let stored = self
            .state
            .boards
            .iter_mut()
            .find(|stored| stored.id() == board.id())
            .ok_or_else(|| StoreError::row_not_found("boards", board.id()))?;
        stored.rename(board.title());
        Ok(())
    }

    fn delete_board(&mut self, id: BoardId) -> StoreResult<()> {
        if !self.board_exists(id) {
            return Err(StoreError::row_not_found("boards", id));
        }
        let list_ids: Vec<ListId> = self
            .state
            .lists
            .iter()
            .filter(|list| list.board_id() == id)
            .map(List::id)
            .collect();
        self.remove_tasks_of(&list_ids);
        self.state.lists.retain(|list| list.board_id() != id);
        self.state.boards.retain(|board| board.id() != id);
        Ok(())
    }

    fn find_list(&mut self, id: ListId) -> StoreResult<Option<List>> {
        Ok(self.state.lists.iter().find(|list| list.id() == id).cloned())
    }

    fn lists_for_board(&mut self, board_id: BoardId) -> StoreResult<Vec<List>> {
        Ok(sorted_by_position(
            self.state
                .lists
                .iter()
                .filter(|list| list.board_id() == board_id)
                .cloned(),
            List::position,
        ))
    }

    fn max_list_position(&mut self, board_id: BoardId) -> StoreResult<Option<Position>> {
        Ok(self
            .state
            .lists
            .iter()
            .filter(|list| list.board_id() == board_id)
            .map(List::position)
            .max())
    }

    fn insert_list(&mut self, list: &List) -> StoreResult<()> {
        if self.list_exists(list.id()) {
            return Err(duplicate_key("lists", list.id()));
        }
        if !self.board_exists(list.board_id()) {
            return Err(missing_parent("lists", "board", list.board_id()));
        }
        self.state.lists.push(list.clone());
        Ok(())
    }

    fn update_list(&mut self, list: &List) -> StoreResult<()> {
        self.list_mut(list.id())?.rename(list.title());
        Ok(())
    }

    fn set_list_position(&mut self, id: ListId, position: Position) -> StoreResult<()> {
        self.list_mut(id)?.reposition(position);
        Ok(())
    }

    fn delete_list(&mut self, id: ListId) -> StoreResult<()> {
        if !self.list_exists(id) {
            return Err(StoreError::row_not_found("lists", id));
        }
        self.remove_tasks_of(&[id]);
        self.state.lists.retain(|list| list.id() != id);
        Ok(())
    }

    fn find_task(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        Ok(self.state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    fn tasks_for_list(&mut self, list_id: ListId) -> StoreResult<Vec<Task>> {
        Ok(sorted_by_position(
            self.state
                .tasks
                .iter()
                .filter(|task| task.list_id() == list_id)
                .cloned(),
            Task::position,
        ))
    }

    fn max_task_position(&mut self, list_id: ListId) -> StoreResult<Option<Position>> {
        Ok(self
            .state
            .tasks
            .iter()
            .filter(|task| task.list_id() == list_id)
            .map(Task::position)
            .max())
    }

    fn insert_task(&mut self, task: &Task) -> StoreResult<()> {
        if self.state.tasks.iter().any(|stored| stored.id() == task.id()) {
            return Err(duplicate_key("tasks", task.id()));
        }
        if !self.list_exists(task.list_id()) {
            return Err(missing_parent("tasks", "list", task.list_id()));
        }
        self.state.tasks.push(task.clone());
        Ok(())
    }

    fn update_task(&mut self, task: &Task) -> StoreResult<()> {
        if !self.list_exists(task.list_id()) {
            return Err(missing_parent("tasks", "list", task.list_id()));
        }
        *self.task_mut(task.id())? = task.clone();
        Ok(())
    }

    fn set_task_position(&mut self, id: TaskId, position: Position) -> StoreResult<()> {
        let task = self.task_mut(id)?;
        let list_id = task.list_id();
        task.relocate(list_id, position);
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|task| task.id() != id);
        if self.state.tasks.len() == before {
            return Err(StoreError::row_not_found("tasks", id));
        }
        Ok(())
    }

    fn append_action(&mut self, entry: &ActionLogEntry) -> StoreResult<()> {
        if self.reject_action_appends {
            return Err(StoreError::persistence(std::io::Error::other(
                "action log append rejected",
            )));
        }
        self.state.actions.push(entry.clone());
        Ok(())
    }

    fn action_log(&mut self) -> StoreResult<Vec<ActionLogEntry>> {
        Ok(self.state.actions.clone())
    }
}
