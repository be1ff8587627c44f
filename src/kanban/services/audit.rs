//! User action log recording and retrieval.

use super::error::KanbanResult;
use crate::kanban::{
    domain::ActionLogEntry,
    ports::{KanbanStore, KanbanTransaction, StoreResult},
};
use mockable::Clock;
use std::sync::Arc;

/// Appends entries to the user action log.
///
/// [`ActionRecorder::record_in`] joins a transaction opened by the caller so
/// the entry commits or rolls back together with the mutation it describes.
#[derive(Debug)]
pub struct ActionRecorder<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl<C> Clone for ActionRecorder<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> ActionRecorder<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a recorder stamping entries with `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Appends `action` inside the caller's transaction.
    ///
    /// # Errors
    ///
    /// Returns the store error when the append fails; the caller's
    /// transaction is then expected to roll back.
    pub fn record_in(
        &self,
        tx: &mut dyn KanbanTransaction,
        action: impl Into<String>,
    ) -> StoreResult<ActionLogEntry> {
        let entry = ActionLogEntry::new(action, &*self.clock);
        tx.append_action(&entry)?;
        Ok(entry)
    }
}

/// Action log service for standalone records and log retrieval.
#[derive(Clone)]
pub struct ActionLogService<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    recorder: ActionRecorder<C>,
}

impl<S, C> ActionLogService<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new action log service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            recorder: ActionRecorder::new(clock),
        }
    }

    /// Records `action` in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns [`super::KanbanError::Store`] when the append fails.
    pub async fn record(&self, action: impl Into<String>) -> KanbanResult<ActionLogEntry> {
        let recorder = self.recorder.clone();
        let action_text = action.into();
        self.store
            .transaction(move |tx| Ok(recorder.record_in(tx, action_text)?))
            .await
    }

    /// Returns every recorded action, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`super::KanbanError::Store`] when the read fails.
    pub async fn entries(&self) -> KanbanResult<Vec<ActionLogEntry>> {
        self.store
            .transaction(|tx| Ok(tx.action_log()?))
            .await
    }
}
