//! Entity enumeration and type derivation.

use std::collections::BTreeSet;

use ent_core::{Entity, EntityStub, entity_type};
use ent_store::{ConfigStore, StoreError};

/// Discovers the entity universe: stubs, full bodies, and derived types.
pub struct Catalog<'a, S> {
    store: &'a S,
}

impl<'a, S: ConfigStore> Catalog<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Every stub currently known to the store. No local retry.
    pub async fn list_stubs(&self) -> Result<Vec<EntityStub>, StoreError> {
        self.store.list_stubs().await
    }

    /// Deduplicated entity types in first-seen order, derived purely from
    /// the stub list — one round trip total.
    pub async fn list_types(&self) -> Result<Vec<String>, StoreError> {
        let stubs = self.store.list_stubs().await?;
        let mut seen = BTreeSet::new();
        let mut types = Vec::new();
        for stub in &stubs {
            let ty = entity_type(&stub.id);
            if seen.insert(ty) {
                types.push(ty.to_string());
            }
        }
        Ok(types)
    }

    /// Bulk body fetch of every entity.
    pub async fn list_entities(&self) -> Result<Vec<Entity>, StoreError> {
        self.store.list_entities().await
    }

    /// Server-side filtered bulk fetch for one entity type.
    pub async fn list_entities_by_type(
        &self,
        entity_type: &str,
    ) -> Result<Vec<Entity>, StoreError> {
        self.store.list_entities_by_type(entity_type).await
    }
}
