//! Shared fixtures for `PostgreSQL` integration tests.

use corkboard::{
    config::DatabaseConfig,
    kanban::{
        adapters::postgres::PostgresKanbanStore,
        domain::{Board, List, Task},
        services::{
            ActionLogService, BoardService, CreateTaskRequest, KanbanResult, ListService,
            TaskService,
        },
    },
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::fixture;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Runtime;
use uuid::Uuid;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// SQL creating the kanban schema.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_kanban_tables/up.sql");

/// SQL dropping the kanban schema.
pub const DROP_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_kanban_tables/down.sql");

/// Template database holding the migrated schema.
pub const TEMPLATE_DB: &str = "corkboard_test_template";

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(CREATE_SCHEMA_SQL)
                .map_err(|e| eyre::eyre!("schema migration failed: {e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Drops a per-test database when it goes out of scope.
struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(err) = self.cluster.drop_database(self.db_name.as_str()) {
            tracing::warn!(database = %self.db_name, error = %err, "failed to drop test database");
        }
    }
}

/// Services bound to a store over a per-test database.
///
/// Fields drop in declaration order, so the pool closes before the guard
/// drops the database.
pub struct PgKanban {
    /// Board service.
    pub boards: BoardService<PostgresKanbanStore, DefaultClock>,
    /// List service.
    pub lists: ListService<PostgresKanbanStore, DefaultClock>,
    /// Task service.
    pub tasks: TaskService<PostgresKanbanStore, DefaultClock>,
    /// Action log service.
    pub logs: ActionLogService<PostgresKanbanStore, DefaultClock>,
    runtime: Runtime,
    database_url: String,
    _cleanup: CleanupGuard,
}

impl PgKanban {
    fn create(cluster: &'static TestCluster) -> Result<Self, BoxError> {
        ensure_template(cluster)?;
        let db_name = format!("kanban_test_{}", Uuid::new_v4().simple());
        cluster
            .create_database_from_template(db_name.as_str(), TEMPLATE_DB)
            .map_err(|e| Box::new(e) as BoxError)?;
        let cleanup = CleanupGuard {
            cluster,
            db_name: db_name.clone(),
        };

        let database_url = cluster.connection().database_url(&db_name);
        let store = Arc::new(PostgresKanbanStore::connect(&DatabaseConfig::new(
            database_url.as_str(),
            2,
        ))?);
        let clock = Arc::new(DefaultClock);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            boards: BoardService::new(Arc::clone(&store), Arc::clone(&clock)),
            lists: ListService::new(Arc::clone(&store), Arc::clone(&clock)),
            tasks: TaskService::new(Arc::clone(&store), Arc::clone(&clock)),
            logs: ActionLogService::new(store, clock),
            runtime,
            database_url,
            _cleanup: cleanup,
        })
    }

    /// Drives an async test body to completion on this fixture's runtime.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `body`.
    pub fn run<F>(&self, body: F) -> Result<(), BoxError>
    where
        F: Future<Output = Result<(), BoxError>>,
    {
        self.runtime.block_on(body)
    }

    /// Runs raw SQL against the per-test database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the statements fail.
    pub fn execute_sql(&self, sql: &str) -> Result<(), BoxError> {
        let mut conn = PgConnection::establish(&self.database_url)?;
        conn.batch_execute(sql)?;
        Ok(())
    }

    /// Creates a board with one list per title, in order.
    pub async fn board_with_lists(&self, titles: &[&str]) -> KanbanResult<(Board, Vec<List>)> {
        let board = self.boards.create_board("Roadmap").await?;
        let mut lists = Vec::with_capacity(titles.len());
        for title in titles {
            lists.push(self.lists.create_list(board.id(), *title).await?);
        }
        Ok((board, lists))
    }

    /// Appends one task per title to `list`, in order.
    pub async fn fill(&self, list: &List, titles: &[&str]) -> KanbanResult<Vec<Task>> {
        let mut tasks = Vec::with_capacity(titles.len());
        for title in titles {
            tasks.push(
                self.tasks
                    .create_task(CreateTaskRequest::new(list.id(), *title))
                    .await?,
            );
        }
        Ok(tasks)
    }

    /// Returns the action log texts, oldest first.
    pub async fn action_texts(&self) -> KanbanResult<Vec<String>> {
        Ok(self
            .logs
            .entries()
            .await?
            .into_iter()
            .map(|entry| entry.action().to_owned())
            .collect())
    }
}

/// Provides services over a fresh database on the shared embedded cluster.
#[fixture]
pub fn pg_kanban(shared_test_cluster: &'static TestCluster) -> PgKanban {
    PgKanban::create(shared_test_cluster).expect("per-test database setup")
}

/// Returns `(title, order)` pairs for a task sequence.
pub fn layout(tasks: &[Task]) -> Vec<(String, u32)> {
    tasks
        .iter()
        .map(|task| (task.title().to_owned(), task.position().value()))
        .collect()
}

/// Returns the layout of `titles` numbered densely from one.
pub fn numbered(titles: &[&str]) -> Vec<(String, u32)> {
    titles
        .iter()
        .zip(1..)
        .map(|(title, value)| ((*title).to_owned(), value))
        .collect()
}
