//! Export orchestration.
//!
//! Fetches every entity's current body and assembles an export bundle.
//! Export is best-effort by design: per-entity fetch failures are classified
//! against the suppression policy and either swallowed (known benign) or
//! logged (real, but never fatal). Only the initial listing call can fail
//! the whole operation.

use ent_core::{
    ExportBundle, ExportMeta, SuppressionPolicy, SyncContext,
    policy::{CLOUD_UNAVAILABLE_MESSAGE, FILE_INSTALL_ID},
};
use ent_store::{ConfigStore, StoreError};
use futures::{StreamExt, stream};
use tracing::{debug, error, warn};

use crate::error::EngineError;
use crate::progress::ProgressSink;

/// Default size of the refetch worker pool.
pub const DEFAULT_EXPORT_CONCURRENCY: usize = 16;

/// How many per-entity refetches run at once.
///
/// Bounded is the default; `Unbounded` launches every refetch at once and
/// assumes the store can absorb a burst equal to the entity count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    Bounded(usize),
    Unbounded,
}

impl Default for Concurrency {
    fn default() -> Self {
        Self::Bounded(DEFAULT_EXPORT_CONCURRENCY)
    }
}

impl Concurrency {
    const fn limit(self, working_set: usize) -> usize {
        let limit = match self {
            Self::Bounded(n) => n,
            Self::Unbounded => working_set,
        };
        if limit == 0 { 1 } else { limit }
    }
}

/// Options for one export call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub concurrency: Concurrency,
}

/// Assembles an export bundle from the store's full entity universe.
pub struct Exporter<'a, S> {
    store: &'a S,
    context: &'a SyncContext,
    policy: &'a SuppressionPolicy,
    options: ExportOptions,
}

impl<'a, S: ConfigStore> Exporter<'a, S> {
    #[must_use]
    pub fn new(store: &'a S, context: &'a SyncContext, policy: &'a SuppressionPolicy) -> Self {
        Self {
            store,
            context,
            policy,
            options: ExportOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Export every entity into a bundle.
    ///
    /// The bulk listing gives the working set; each entity is then refetched
    /// by id so the bundle reflects the latest remote state and so failures
    /// can be classified per item. Entities whose refetch fails are omitted;
    /// the bundle may be a strict subset of the working set.
    ///
    /// # Errors
    ///
    /// Only a failure of the listing call itself ([`EngineError::List`]).
    pub async fn export_all(
        &self,
        progress: &dyn ProgressSink,
    ) -> Result<ExportBundle, EngineError> {
        let working_set = self.store.list_entities().await.map_err(EngineError::List)?;
        let total = working_set.len();
        progress.start(total as u64, "exporting configuration entities");

        let mut ids = Vec::with_capacity(total);
        for entity in &working_set {
            if let Some(id) = entity.id() {
                ids.push(id.to_string());
            } else {
                warn!("listed entity carries no _id; skipping");
                progress.advance("(missing id)");
            }
        }

        let limit = self.options.concurrency.limit(ids.len());
        let store = self.store;
        let mut fetches = stream::iter(ids.into_iter().map(|id| async move {
            let fetched = store.get_entity(&id).await;
            (id, fetched)
        }))
        .buffer_unordered(limit);

        let mut bundle = ExportBundle::new(ExportMeta::now(
            &self.context.origin,
            &self.context.exported_by,
        ));
        while let Some((id, fetched)) = fetches.next().await {
            progress.advance(&id);
            match fetched {
                Ok(entity) => {
                    bundle.insert(id, entity);
                }
                Err(err) => match classify_fetch_failure(&id, &err, self.policy) {
                    Some(why) => {
                        debug!(id = %id, why, error = %err, "suppressing benign fetch failure");
                    }
                    None => {
                        error!(id = %id, error = %err, "entity fetch failed; omitted from export");
                    }
                },
            }
        }

        progress.finish_ok(&format!("exported {} of {total} entities", bundle.len()));
        Ok(bundle)
    }
}

/// Decide whether a fetch failure is known benign.
///
/// Returns the suppression reason, or `None` when the failure is real and
/// must be logged. Suppression is allow-listed, never blanket:
/// - 403 carrying the exact cloud-offering message;
/// - 404 with the not-found reason for an id in the known-unavailable set;
/// - 404 whose message references the legacy file-install config id.
fn classify_fetch_failure(
    id: &str,
    err: &StoreError,
    policy: &SuppressionPolicy,
) -> Option<&'static str> {
    match err {
        StoreError::Api {
            status: 403,
            message,
            ..
        } if message == CLOUD_UNAVAILABLE_MESSAGE => Some("unavailable in the cloud offering"),
        StoreError::Api {
            status: 404,
            reason,
            ..
        } if policy.is_known_unavailable(id) && policy.is_not_found_reason(reason) => {
            Some("known unavailable in this deployment")
        }
        StoreError::Api {
            status: 404,
            message,
            ..
        } if message.contains(FILE_INSTALL_ID) => Some("legacy file-install leftover"),
        _ => None,
    }
}
