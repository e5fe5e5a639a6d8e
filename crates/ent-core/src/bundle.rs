//! Export bundle: an in-memory snapshot of the store plus provenance.
//!
//! The wire shape is `{ "meta": {...}, "idm": { "<id>": {...}, ... } }`.
//! The entity map preserves insertion order so that a later import walks the
//! bundle in the same order it was assembled (some configuration entities
//! have ordering dependencies the engine does not model).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Provenance attached once at bundle creation and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMeta {
    /// Base URL of the store the bundle was exported from.
    pub origin: String,

    /// Operator identity that ran the export.
    pub exported_by: String,

    /// Export timestamp.
    pub export_date: DateTime<Utc>,

    /// Tool name.
    pub export_tool: String,

    /// Tool version.
    pub export_tool_version: String,
}

impl ExportMeta {
    /// Stamp provenance for an export running right now.
    #[must_use]
    pub fn now(origin: impl Into<String>, exported_by: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            exported_by: exported_by.into(),
            export_date: Utc::now(),
            export_tool: "entsync".to_string(),
            export_tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// A snapshot mapping entity ids to full bodies, plus provenance.
///
/// Id-unique by construction (map key). The map may be a strict subset of
/// the store's working set: export suppresses known-benign failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub meta: ExportMeta,

    /// Entity bodies keyed by id, in export insertion order.
    #[serde(rename = "idm")]
    pub entities: IndexMap<String, Entity>,
}

impl ExportBundle {
    #[must_use]
    pub fn new(meta: ExportMeta) -> Self {
        Self {
            meta,
            entities: IndexMap::new(),
        }
    }

    /// Insert an exported entity under its id.
    pub fn insert(&mut self, id: impl Into<String>, entity: Entity) {
        self.entities.insert(id.into(), entity);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
