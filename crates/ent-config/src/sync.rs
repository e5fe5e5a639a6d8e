//! Sync engine configuration: deployment flavor, export concurrency, and
//! suppression-table overrides.

use ent_core::{Deployment, ReasonMatch, SuppressionPolicy};
use serde::{Deserialize, Serialize};

const fn default_concurrency() -> usize {
    16
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Which flavor of store this environment is (`classic` or `cloud`).
    #[serde(default)]
    pub deployment: Deployment,

    /// Export refetch worker-pool size. `0` opts into unbounded fan-out.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Compare 404 reason phrases case-insensitively.
    #[serde(default)]
    pub case_insensitive_reasons: bool,

    /// Extra ids merged over the built-in known-unavailable table.
    #[serde(default)]
    pub known_unavailable: Vec<String>,

    /// Extra ids merged over the built-in protected table.
    #[serde(default)]
    pub protected: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            deployment: Deployment::default(),
            concurrency: default_concurrency(),
            case_insensitive_reasons: false,
            known_unavailable: Vec::new(),
            protected: Vec::new(),
        }
    }
}

impl SyncConfig {
    /// Build the suppression policy: built-in tables plus configured extras.
    #[must_use]
    pub fn policy(&self) -> SuppressionPolicy {
        let mode = if self.case_insensitive_reasons {
            ReasonMatch::CaseInsensitive
        } else {
            ReasonMatch::Exact
        };
        SuppressionPolicy::default()
            .with_reason_match(mode)
            .with_known_unavailable(self.known_unavailable.iter().cloned())
            .with_protected(self.protected.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_bounded_classic_exact() {
        let config = SyncConfig::default();
        assert_eq!(config.deployment, Deployment::Classic);
        assert_eq!(config.concurrency, 16);
        assert!(!config.case_insensitive_reasons);
    }

    #[test]
    fn policy_merges_configured_ids() {
        let config = SyncConfig {
            known_unavailable: vec!["custom/probe".to_string()],
            protected: vec!["emailTemplate/custom".to_string()],
            ..SyncConfig::default()
        };
        let policy = config.policy();
        assert!(policy.is_known_unavailable("script"));
        assert!(policy.is_known_unavailable("custom/probe"));
        assert!(policy.is_protected("emailTemplate/custom"));
    }

    #[test]
    fn policy_reason_mode_follows_flag() {
        let config = SyncConfig {
            case_insensitive_reasons: true,
            ..SyncConfig::default()
        };
        assert!(config.policy().is_not_found_reason("not found"));
        assert!(!SyncConfig::default().policy().is_not_found_reason("not found"));
    }
}
