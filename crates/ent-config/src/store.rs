//! Remote store connection configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Base URL of the configuration store, e.g. `https://idm.example.com/openidm`.
    #[serde(default)]
    pub base_url: String,

    /// Bearer token. Takes precedence over username/password when set.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Basic-auth username.
    #[serde(default)]
    pub username: Option<String>,

    /// Basic-auth password.
    #[serde(default)]
    pub password: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_token: None,
            username: None,
            password: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// True when enough is present to reach a store.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Fail with [`ConfigError::NotConfigured`] when the section is unusable.
    pub fn require_configured(&self) -> Result<(), ConfigError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "store".to_string(),
            })
        }
    }

    /// Operator identity for export provenance: the basic-auth username
    /// when present, otherwise a token placeholder.
    #[must_use]
    pub fn operator(&self) -> String {
        self.username
            .clone()
            .unwrap_or_else(|| "api-token".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_by_default() {
        let config = StoreConfig::default();
        assert!(!config.is_configured());
        assert!(config.require_configured().is_err());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn base_url_alone_is_enough() {
        let config = StoreConfig {
            base_url: "https://idm.example.com".to_string(),
            ..StoreConfig::default()
        };
        assert!(config.is_configured());
        assert!(config.require_configured().is_ok());
    }

    #[test]
    fn operator_prefers_username() {
        let config = StoreConfig {
            username: Some("admin".to_string()),
            ..StoreConfig::default()
        };
        assert_eq!(config.operator(), "admin");
        assert_eq!(StoreConfig::default().operator(), "api-token");
    }
}
