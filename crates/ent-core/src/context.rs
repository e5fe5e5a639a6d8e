//! Deployment flavor and per-call sync context.
//!
//! The deployment type changes how store failures are classified (the cloud
//! offering rejects writes to protected system entities). It is passed
//! explicitly into every orchestrator call rather than read from ambient
//! process state.

use serde::{Deserialize, Serialize};

/// Which flavor of the remote store a call targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// Self-hosted deployment; no protected-entity write restrictions.
    #[default]
    Classic,

    /// Managed-identity cloud offering; writes to protected system
    /// entities return 403/400-class errors that imports must tolerate.
    Cloud,
}

impl std::fmt::Display for Deployment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Cloud => write!(f, "cloud"),
        }
    }
}

/// Explicit context for one engine call: deployment flavor plus the
/// provenance identity stamped into export bundles.
#[derive(Debug, Clone)]
pub struct SyncContext {
    pub deployment: Deployment,

    /// Base URL of the store, recorded as bundle origin.
    pub origin: String,

    /// Operator identity, recorded as `exportedBy`.
    pub exported_by: String,
}

impl SyncContext {
    #[must_use]
    pub fn new(
        deployment: Deployment,
        origin: impl Into<String>,
        exported_by: impl Into<String>,
    ) -> Self {
        Self {
            deployment,
            origin: origin.into(),
            exported_by: exported_by.into(),
        }
    }
}
