//! Delete orchestration.
//!
//! Deletes every entity, or every entity of one type, sequentially.
//! Per-id failures accumulate and are raised as one aggregate after the
//! whole batch was attempted; only the listing call itself is fatal.

use ent_core::Entity;
use ent_store::ConfigStore;
use tracing::error;

use crate::error::{AggregateError, EngineError, ItemError};
use crate::progress::ProgressSink;

/// Deletes entities with per-id failure aggregation.
pub struct Deleter<'a, S> {
    store: &'a S,
}

impl<'a, S: ConfigStore> Deleter<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Delete every entity known to the store.
    ///
    /// # Errors
    ///
    /// [`EngineError::List`] when the stub listing fails;
    /// [`EngineError::Aggregate`] when at least one delete failed.
    pub async fn delete_all(
        &self,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<Entity>, EngineError> {
        let stubs = self.store.list_stubs().await.map_err(EngineError::List)?;
        let ids: Vec<String> = stubs.into_iter().map(|stub| stub.id).collect();
        self.delete_ids(ids, "delete-all", progress).await
    }

    /// Delete every entity of one type.
    ///
    /// # Errors
    ///
    /// [`EngineError::List`] when the typed listing fails;
    /// [`EngineError::Aggregate`] when at least one delete failed.
    pub async fn delete_all_of_type(
        &self,
        entity_type: &str,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<Entity>, EngineError> {
        let entities = self
            .store
            .list_entities_by_type(entity_type)
            .await
            .map_err(EngineError::List)?;
        let ids: Vec<String> = entities
            .iter()
            .filter_map(Entity::id)
            .map(str::to_string)
            .collect();
        self.delete_ids(ids, "delete-by-type", progress).await
    }

    async fn delete_ids(
        &self,
        ids: Vec<String>,
        operation: &'static str,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<Entity>, EngineError> {
        let total = ids.len();
        progress.start(total as u64, "deleting configuration entities");

        let mut deleted = Vec::new();
        let mut errors = Vec::new();
        for id in ids {
            progress.advance(&id);
            match self.store.delete_entity(&id).await {
                Ok(entity) => deleted.push(entity),
                Err(err) => {
                    error!(id = %id, error = %err, "entity delete failed");
                    errors.push(ItemError::new(id, err));
                }
            }
        }

        if errors.is_empty() {
            progress.finish_ok(&format!("deleted {} of {total} entities", deleted.len()));
            Ok(deleted)
        } else {
            progress.finish_err(&format!("{} of {total} deletes failed", errors.len()));
            Err(AggregateError {
                operation,
                attempted: total,
                errors,
            }
            .into())
        }
    }
}
