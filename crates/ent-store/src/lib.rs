//! # ent-store
//!
//! The `ConfigStore` capability: point CRUD operations against one
//! configuration entity by id, plus the bulk listing calls the engine fans
//! out from.
//!
//! The trait is the seam the sync engine is written against; the shipped
//! implementation is [`HttpConfigStore`], a reqwest client for the store's
//! `/config` REST surface. Engine tests substitute an in-memory store.

mod error;
mod http;

pub use error::StoreError;
pub use http::{Auth, HttpConfigStore};

use async_trait::async_trait;
use ent_core::{Entity, EntityStub};

/// Point CRUD against a remote configuration store.
///
/// All operations are fresh reads/writes: no caching, no optimistic
/// concurrency checks. `put_entity` is an upsert (create-or-replace).
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Every stub currently known to the store.
    async fn list_stubs(&self) -> Result<Vec<EntityStub>, StoreError>;

    /// Bulk body fetch of every entity.
    async fn list_entities(&self) -> Result<Vec<Entity>, StoreError>;

    /// Server-side filtered bulk fetch for ids whose leading segment
    /// matches `entity_type`.
    async fn list_entities_by_type(
        &self,
        entity_type: &str,
    ) -> Result<Vec<Entity>, StoreError>;

    /// Full fetch of one entity by id.
    async fn get_entity(&self, id: &str) -> Result<Entity, StoreError>;

    /// Create-or-replace one entity by id. `wait` asks the store to block
    /// until the change has been applied.
    async fn put_entity(&self, id: &str, body: &Entity, wait: bool)
    -> Result<Entity, StoreError>;

    /// Delete one entity by id, returning the deleted body.
    async fn delete_entity(&self, id: &str) -> Result<Entity, StoreError>;
}
