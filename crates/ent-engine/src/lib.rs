//! # ent-engine
//!
//! The bulk synchronization engine: turns the single-entity CRUD primitives
//! of [`ent_store::ConfigStore`] into fault-tolerant batch operations.
//!
//! - [`Catalog`] — entity enumeration and type derivation
//! - [`Exporter`] — export-all with concurrent refetch and known-failure
//!   suppression
//! - [`Importer`] — sequential import with optional script-hook validation
//!   and protected-entity suppression
//! - [`Deleter`] — delete-all / delete-by-type with failure aggregation
//!
//! Per-item failures inside export are classified and either suppressed or
//! logged; per-item failures inside import and delete are collected and
//! surfaced as one [`AggregateError`] after the whole batch has been
//! attempted. Only a failure of the listing call itself aborts a batch.

pub mod catalog;
pub mod delete;
pub mod error;
pub mod export;
pub mod import;
pub mod progress;
pub mod validate;

pub use catalog::Catalog;
pub use delete::Deleter;
pub use error::{AggregateError, EngineError, ItemError, ItemFailure};
pub use export::{Concurrency, ExportOptions, Exporter};
pub use import::{ImportOptions, Importer};
pub use progress::{NoProgress, ProgressSink};

use ent_core::{Entity, ExportBundle, SuppressionPolicy, SyncContext};
use ent_store::ConfigStore;

/// Facade bundling a store, an explicit sync context, and a suppression
/// policy behind the exposed batch surface.
pub struct SyncEngine<S> {
    store: S,
    context: SyncContext,
    policy: SuppressionPolicy,
}

impl<S: ConfigStore> SyncEngine<S> {
    #[must_use]
    pub fn new(store: S, context: SyncContext, policy: SuppressionPolicy) -> Self {
        Self {
            store,
            context,
            policy,
        }
    }

    /// Export every entity into a bundle. Best-effort: per-entity fetch
    /// failures never fail the call.
    pub async fn export_all(
        &self,
        options: ExportOptions,
        progress: &dyn ProgressSink,
    ) -> Result<ExportBundle, EngineError> {
        Exporter::new(&self.store, &self.context, &self.policy)
            .with_options(options)
            .export_all(progress)
            .await
    }

    /// Apply a bundle back to the store, sequentially, aggregating per-id
    /// failures.
    pub async fn import_all(
        &self,
        bundle: &ExportBundle,
        options: ImportOptions,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<Entity>, EngineError> {
        Importer::new(&self.store, &self.context, &self.policy)
            .import_all(bundle, options, progress)
            .await
    }

    /// Delete every entity, aggregating per-id failures.
    pub async fn delete_all(
        &self,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<Entity>, EngineError> {
        Deleter::new(&self.store).delete_all(progress).await
    }

    /// Delete every entity of one type, aggregating per-id failures.
    pub async fn delete_all_of_type(
        &self,
        entity_type: &str,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<Entity>, EngineError> {
        Deleter::new(&self.store)
            .delete_all_of_type(entity_type, progress)
            .await
    }

    /// Distinct entity types, first-seen order.
    pub async fn list_types(&self) -> Result<Vec<String>, ent_store::StoreError> {
        Catalog::new(&self.store).list_types().await
    }
}
