//! Blocking operation helpers for the `PostgreSQL` store.
//!
//! Diesel connections are synchronous, so every unit of work is moved onto
//! tokio's blocking thread pool.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

use crate::kanban::ports::{StoreError, StoreResult};

/// `PostgreSQL` connection pool type used by the kanban store.
pub type KanbanPgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection type for internal use.
pub(super) type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Runs a blocking closure and maps join failures into the caller's error
/// type.
pub(super) async fn run_blocking<F, T, E>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<StoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| E::from(StoreError::persistence(err)))?
}

/// Obtains a connection from the pool.
pub(super) fn get_conn(pool: &KanbanPgPool) -> StoreResult<PooledConn> {
    pool.get().map_err(StoreError::persistence)
}
