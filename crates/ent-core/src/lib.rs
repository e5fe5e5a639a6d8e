//! # ent-core
//!
//! Core types shared across the entsync crates:
//! - `Entity` / `EntityStub` and entity-type derivation
//! - `ExportBundle` with provenance metadata
//! - `Deployment` and the explicit `SyncContext`
//! - `SuppressionPolicy` — the known-unavailable and protected id tables

pub mod bundle;
pub mod context;
pub mod entity;
pub mod policy;

pub use bundle::{ExportBundle, ExportMeta};
pub use context::{Deployment, SyncContext};
pub use entity::{Entity, EntityStub, entity_type};
pub use policy::{ReasonMatch, SuppressionPolicy};
