//! # ent-config
//!
//! Layered configuration loading for entsync using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ENTSYNC_*` prefix, `__` as separator)
//! 2. Project-level `.entsync/config.toml`
//! 3. User-level `~/.config/entsync/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ENTSYNC_STORE__BASE_URL` -> `store.base_url`,
//! `ENTSYNC_SYNC__DEPLOYMENT` -> `sync.deployment`, etc. The `__` (double
//! underscore) separates nested config sections.

mod error;
mod store;
mod sync;

pub use error::ConfigError;
pub use store::StoreConfig;
pub use sync::SyncConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EntConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl EntConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. This is the typical
    /// entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".entsync/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ENTSYNC_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("entsync").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = EntConfig::default();
        assert!(!config.store.is_configured());
        assert_eq!(config.sync.concurrency, 16);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: EntConfig = EntConfig::figment().extract().expect("defaults");
            assert!(!config.store.is_configured());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_nested_fields() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ENTSYNC_STORE__BASE_URL", "https://idm.example.com");
            jail.set_env("ENTSYNC_SYNC__DEPLOYMENT", "cloud");
            jail.set_env("ENTSYNC_SYNC__CONCURRENCY", "4");

            let config: EntConfig = EntConfig::figment().extract()?;
            assert_eq!(config.store.base_url, "https://idm.example.com");
            assert_eq!(config.sync.deployment, ent_core::Deployment::Cloud);
            assert_eq!(config.sync.concurrency, 4);
            Ok(())
        });
    }

    #[test]
    fn project_toml_layers_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".entsync")?;
            jail.create_file(
                ".entsync/config.toml",
                r#"
                    [store]
                    base_url = "https://from-toml.example.com"
                    api_token = "t0ken"
                "#,
            )?;
            jail.set_env("ENTSYNC_STORE__BASE_URL", "https://from-env.example.com");

            let config: EntConfig = EntConfig::figment().extract()?;
            assert_eq!(config.store.base_url, "https://from-env.example.com");
            assert_eq!(config.store.api_token.as_deref(), Some("t0ken"));
            Ok(())
        });
    }
}
