//! Import orchestration.
//!
//! Applies an export bundle back to the store, one id at a time, in the
//! bundle's iteration order. Sequential on purpose: aggregation must
//! reflect a deterministic per-id outcome list, and some entities have
//! ordering dependencies the engine does not model.

use ent_core::{Deployment, Entity, ExportBundle, SuppressionPolicy, SyncContext};
use ent_store::ConfigStore;
use tracing::{error, warn};

use crate::error::{AggregateError, EngineError, ItemError, ItemFailure};
use crate::progress::ProgressSink;
use crate::validate::{render_violations, validate_script_hooks};

/// Options for one import call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Run the script-hook validator on each entity before upsert; invalid
    /// entities are recorded as failures without any store call.
    pub validate: bool,
}

/// Applies a bundle to the store with per-id failure aggregation.
pub struct Importer<'a, S> {
    store: &'a S,
    context: &'a SyncContext,
    policy: &'a SuppressionPolicy,
}

impl<'a, S: ConfigStore> Importer<'a, S> {
    #[must_use]
    pub const fn new(
        store: &'a S,
        context: &'a SyncContext,
        policy: &'a SuppressionPolicy,
    ) -> Self {
        Self {
            store,
            context,
            policy,
        }
    }

    /// Upsert every entity in the bundle.
    ///
    /// Processing never short-circuits: every id is attempted, then the
    /// recorded failures (if any) are raised as one aggregate. Writes that
    /// succeeded before a later failure are not rolled back — an aggregate
    /// failure means "some or all items failed", not "nothing changed".
    ///
    /// # Errors
    ///
    /// [`EngineError::Aggregate`] when at least one id failed.
    pub async fn import_all(
        &self,
        bundle: &ExportBundle,
        options: ImportOptions,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<Entity>, EngineError> {
        let total = bundle.len();
        progress.start(total as u64, "importing configuration entities");

        let mut applied = Vec::new();
        let mut errors = Vec::new();
        for (id, entity) in &bundle.entities {
            progress.advance(id);

            if options.validate {
                if let Err(violations) = validate_script_hooks(entity) {
                    error!(id = %id, "script-hook validation failed; entity not written");
                    errors.push(ItemError::new(
                        id.clone(),
                        ItemFailure::Validation(render_violations(&violations)),
                    ));
                    continue;
                }
            }

            match self.store.put_entity(id, entity, false).await {
                Ok(stored) => applied.push(stored),
                Err(err)
                    if self.context.deployment == Deployment::Cloud
                        && self.policy.is_protected(id)
                        && err.is_write_rejection() =>
                {
                    warn!(id = %id, error = %err, "expected conflict on protected entity; skipped");
                }
                Err(err) => {
                    error!(id = %id, error = %err, "entity import failed");
                    errors.push(ItemError::new(id.clone(), err));
                }
            }
        }

        if errors.is_empty() {
            progress.finish_ok(&format!("imported {} of {total} entities", applied.len()));
            Ok(applied)
        } else {
            progress.finish_err(&format!("{} of {total} entities failed", errors.len()));
            Err(AggregateError {
                operation: "import",
                attempted: total,
                errors,
            }
            .into())
        }
    }
}
