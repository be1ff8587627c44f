//! `PostgreSQL` store implementation for boards, lists, tasks, and the
//! action log.

use super::{
    blocking_helpers::{KanbanPgPool, get_conn, run_blocking},
    models::{ActionLogRow, BoardRow, ListRow, TaskRow},
    schema::{boards, lists, tasks, user_action_logs},
};
use crate::config::DatabaseConfig;
use crate::kanban::{
    domain::{
        ActionLogEntry, ActionLogId, Board, BoardId, List, ListId, PersistedListData,
        PersistedTaskData, Position, Task, TaskId,
    },
    ports::{KanbanStore, KanbanTransaction, StoreError, StoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed kanban store.
///
/// Each unit of work runs inside one database transaction on a pooled
/// connection, offloaded to tokio's blocking thread pool.
#[derive(Debug, Clone)]
pub struct PostgresKanbanStore {
    pool: KanbanPgPool,
}

impl PostgresKanbanStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: KanbanPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool from configuration and wraps it in a store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the pool cannot be built.
    pub fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.url());
        let pool = Pool::builder()
            .max_size(config.max_connections())
            .build(manager)
            .map_err(StoreError::persistence)?;
        tracing::info!(
            max_connections = config.max_connections(),
            "kanban store connection pool ready"
        );
        Ok(Self::new(pool))
    }
}

/// Failure inside a Diesel transaction: either the caller's own error or a
/// database error raised by Diesel while committing or rolling back.
enum TransactionFailure<E> {
    Work(E),
    Database(DieselError),
}

impl<E> From<DieselError> for TransactionFailure<E> {
    fn from(err: DieselError) -> Self {
        Self::Database(err)
    }
}

#[async_trait]
impl KanbanStore for PostgresKanbanStore {
    async fn transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn KanbanTransaction) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut pooled = get_conn(&pool)?;
            let connection: &mut PgConnection = &mut pooled;
            connection
                .transaction::<T, TransactionFailure<E>, _>(|tx_conn| {
                    let mut tx = PgTransaction::new(tx_conn);
                    work(&mut tx).map_err(TransactionFailure::Work)
                })
                .map_err(|failure| match failure {
                    TransactionFailure::Work(err) => err,
                    TransactionFailure::Database(err) => E::from(StoreError::persistence(err)),
                })
        })
        .await
    }
}

/// Transaction handle borrowing a connection with an open transaction.
struct PgTransaction<'conn> {
    conn: &'conn mut PgConnection,
}

impl<'conn> PgTransaction<'conn> {
    const fn new(conn: &'conn mut PgConnection) -> Self {
        Self { conn }
    }
}

impl KanbanTransaction for PgTransaction<'_> {
    fn boards(&mut self) -> StoreResult<Vec<Board>> {
        let rows = boards::table
            .order(boards::created_seq.asc())
            .select(BoardRow::as_select())
            .load::<BoardRow>(self.conn)
            .map_err(StoreError::persistence)?;
        Ok(rows.into_iter().map(row_to_board).collect())
    }

    fn find_board(&mut self, id: BoardId) -> StoreResult<Option<Board>> {
        let row = boards::table
            .filter(boards::id.eq(id.into_inner()))
            .select(BoardRow::as_select())
            .first::<BoardRow>(self.conn)
            .optional()
            .map_err(StoreError::persistence)?;
        Ok(row.map(row_to_board))
    }

    fn insert_board(&mut self, board: &Board) -> StoreResult<()> {
        let row = BoardRow {
            id: board.id().into_inner(),
            title: board.title().to_owned(),
        };
        diesel::insert_into(boards::table)
            .values(&row)
            .execute(self.conn)
            .map_err(map_write_error)?;
        Ok(())
    }

    fn update_board(&mut self, board: &Board) -> StoreResult<()> {
        let updated = diesel::update(boards::table.filter(boards::id.eq(board.id().into_inner())))
            .set(boards::title.eq(board.title()))
            .execute(self.conn)
            .map_err(map_write_error)?;
        ensure_touched(updated, "boards", board.id())
    }

    fn delete_board(&mut self, id: BoardId) -> StoreResult<()> {
        let deleted = diesel::delete(boards::table.filter(boards::id.eq(id.into_inner())))
            .execute(self.conn)
            .map_err(map_write_error)?;
        ensure_touched(deleted, "boards", id)
    }

    fn find_list(&mut self, id: ListId) -> StoreResult<Option<List>> {
        let row = lists::table
            .filter(lists::id.eq(id.into_inner()))
            .select(ListRow::as_select())
            .first::<ListRow>(self.conn)
            .optional()
            .map_err(StoreError::persistence)?;
        row.map(row_to_list).transpose()
    }

    fn lists_for_board(&mut self, board_id: BoardId) -> StoreResult<Vec<List>> {
        let rows = lists::table
            .filter(lists::board_id.eq(board_id.into_inner()))
            .order((lists::list_order.asc(), lists::id.asc()))
            .select(ListRow::as_select())
            .load::<ListRow>(self.conn)
            .map_err(StoreError::persistence)?;
        rows.into_iter().map(row_to_list).collect()
    }

    fn max_list_position(&mut self, board_id: BoardId) -> StoreResult<Option<Position>> {
        let max_order: Option<i32> = lists::table
            .filter(lists::board_id.eq(board_id.into_inner()))
            .select(diesel::dsl::max(lists::list_order))
            .first(self.conn)
            .map_err(StoreError::persistence)?;
        max_order.map(column_to_position).transpose()
    }

    fn insert_list(&mut self, list: &List) -> StoreResult<()> {
        let row = ListRow {
            id: list.id().into_inner(),
            board_id: list.board_id().into_inner(),
            title: list.title().to_owned(),
            list_order: position_to_column(list.position())?,
        };
        diesel::insert_into(lists::table)
            .values(&row)
            .execute(self.conn)
            .map_err(map_write_error)?;
        Ok(())
    }

    fn update_list(&mut self, list: &List) -> StoreResult<()> {
        let updated = diesel::update(lists::table.filter(lists::id.eq(list.id().into_inner())))
            .set(lists::title.eq(list.title()))
            .execute(self.conn)
            .map_err(map_write_error)?;
        ensure_touched(updated, "lists", list.id())
    }

    fn set_list_position(&mut self, id: ListId, position: Position) -> StoreResult<()> {
        let list_order = position_to_column(position)?;
        let updated = diesel::update(lists::table.filter(lists::id.eq(id.into_inner())))
            .set(lists::list_order.eq(list_order))
            .execute(self.conn)
            .map_err(map_write_error)?;
        ensure_touched(updated, "lists", id)
    }

    fn delete_list(&mut self, id: ListId) -> StoreResult<()> {
        let deleted = diesel::delete(lists::table.filter(lists::id.eq(id.into_inner())))
            .execute(self.conn)
            .map_err(map_write_error)?;
        ensure_touched(deleted, "lists", id)
    }

    fn find_task(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        let row = tasks::table
            .filter(tasks::id.eq(id.into_inner()))
            .select(TaskRow::as_select())
            .first::<TaskRow>(self.conn)
            .optional()
            .map_err(StoreError::persistence)?;
        row.map(row_to_task).transpose()
    }

    fn tasks_for_list(&mut self, list_id: ListId) -> StoreResult<Vec<Task>> {
        let rows = tasks::table
            .filter(tasks::list_id.eq(list_id.into_inner()))
            .order((tasks::task_order.asc(), tasks::id.asc()))
            .select(TaskRow::as_select())
            .load::<TaskRow>(self.conn)
            .map_err(StoreError::persistence)?;
        rows.into_iter().map(row_to_task).collect()
    }

    fn max_task_position(&mut self, list_id: ListId) -> StoreResult<Option<Position>> {
        let max_order: Option<i32> = tasks::table
            .filter(tasks::list_id.eq(list_id.into_inner()))
            .select(diesel::dsl::max(tasks::task_order))
            .first(self.conn)
            .map_err(StoreError::persistence)?;
        max_order.map(column_to_position).transpose()
    }

    fn insert_task(&mut self, task: &Task) -> StoreResult<()> {
        let row = task_to_row(task)?;
        diesel::insert_into(tasks::table)
            .values(&row)
            .execute(self.conn)
            .map_err(map_write_error)?;
        Ok(())
    }

    fn update_task(&mut self, task: &Task) -> StoreResult<()> {
        let row = task_to_row(task)?;
        let updated = diesel::update(tasks::table.filter(tasks::id.eq(row.id)))
            .set((
                tasks::list_id.eq(row.list_id),
                tasks::title.eq(&row.title),
                tasks::description.eq(&row.description),
                tasks::task_order.eq(row.task_order),
            ))
            .execute(self.conn)
            .map_err(map_write_error)?;
        ensure_touched(updated, "tasks", task.id())
    }

    fn set_task_position(&mut self, id: TaskId, position: Position) -> StoreResult<()> {
        let task_order = position_to_column(position)?;
        let updated = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
            .set(tasks::task_order.eq(task_order))
            .execute(self.conn)
            .map_err(map_write_error)?;
        ensure_touched(updated, "tasks", id)
    }

    fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let deleted = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
            .execute(self.conn)
            .map_err(map_write_error)?;
        ensure_touched(deleted, "tasks", id)
    }

    fn append_action(&mut self, entry: &ActionLogEntry) -> StoreResult<()> {
        let row = ActionLogRow {
            id: entry.id().into_inner(),
            action: entry.action().to_owned(),
            created_at: entry.created_at(),
        };
        diesel::insert_into(user_action_logs::table)
            .values(&row)
            .execute(self.conn)
            .map_err(map_write_error)?;
        Ok(())
    }

    fn action_log(&mut self) -> StoreResult<Vec<ActionLogEntry>> {
        let rows = user_action_logs::table
            .order((user_action_logs::created_at.asc(), user_action_logs::id.asc()))
            .select(ActionLogRow::as_select())
            .load::<ActionLogRow>(self.conn)
            .map_err(StoreError::persistence)?;
        Ok(rows
            .into_iter()
            .map(|row| {
                ActionLogEntry::from_persisted(
                    ActionLogId::from_uuid(row.id),
                    row.action,
                    row.created_at,
                )
            })
            .collect())
    }
}

fn ensure_touched(rows: usize, table: &'static str, id: impl AsRef<uuid::Uuid>) -> StoreResult<()> {
    if rows == 0 {
        return Err(StoreError::row_not_found(table, id));
    }
    Ok(())
}

fn map_write_error(err: DieselError) -> StoreError {
    match err {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation,
            ref info,
        ) => StoreError::ConstraintViolation(info.message().to_owned()),
        _ => StoreError::persistence(err),
    }
}

fn position_to_column(position: Position) -> StoreResult<i32> {
    i32::try_from(position.value()).map_err(StoreError::invalid_persisted_data)
}

fn column_to_position(value: i32) -> StoreResult<Position> {
    let raw = u32::try_from(value).map_err(StoreError::invalid_persisted_data)?;
    Position::new(raw).map_err(StoreError::invalid_persisted_data)
}

fn row_to_board(row: BoardRow) -> Board {
    Board::from_persisted(BoardId::from_uuid(row.id), row.title)
}

fn row_to_list(row: ListRow) -> StoreResult<List> {
    let ListRow {
        id,
        board_id,
        title,
        list_order,
    } = row;
    Ok(List::from_persisted(PersistedListData {
        id: ListId::from_uuid(id),
        board_id: BoardId::from_uuid(board_id),
        title,
        position: column_to_position(list_order)?,
    }))
}

fn row_to_task(row: TaskRow) -> StoreResult<Task> {
    let TaskRow {
        id,
        list_id,
        title,
        description,
        task_order,
    } = row;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        list_id: ListId::from_uuid(list_id),
        title,
        description,
        position: column_to_position(task_order)?,
    }))
}

fn task_to_row(task: &Task) -> StoreResult<TaskRow> {
    Ok(TaskRow {
        id: task.id().into_inner(),
        list_id: task.list_id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        task_order: position_to_column(task.position())?,
    })
}
