//! Configuration entity model.
//!
//! Entities are named JSON documents owned entirely by the remote store and
//! identified by a path-like id (e.g. `emailTemplate/frOnboarding`). The
//! engine treats a body as an immutable value once read and as an opaque
//! write payload on import — it never interprets nested content.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lightweight pointer to a configuration entity, as returned by the store's
/// bulk listing endpoint. Stubs carry no body and are regenerated on every
/// listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStub {
    /// Path-like entity id.
    #[serde(rename = "_id")]
    pub id: String,

    /// Persistent id as reported by the store.
    pub pid: String,

    /// Factory pid for factory-instantiated entities, if any.
    #[serde(rename = "factoryPid")]
    pub factory_pid: Option<String>,
}

/// One named configuration document: an ordered map of arbitrary JSON.
///
/// The `_id` field, when present, names the entity. Everything else is
/// opaque and must round-trip byte-for-byte through export and import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(pub serde_json::Map<String, Value>);

impl Entity {
    /// The entity's own id (`_id`), if the body carries one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("_id").and_then(Value::as_str)
    }

    /// Borrow the underlying JSON map.
    #[must_use]
    pub const fn fields(&self) -> &serde_json::Map<String, Value> {
        &self.0
    }
}

impl From<serde_json::Map<String, Value>> for Entity {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Derive the entity type from an id: the substring before the first `/`.
///
/// Ids without a `/` are their own type.
#[must_use]
pub fn entity_type(id: &str) -> &str {
    id.split_once('/').map_or(id, |(head, _)| head)
}
