pub mod delete;
pub mod export;
pub mod import;
pub mod types;

use ent_config::EntConfig;
use ent_core::SyncContext;
use ent_engine::{Concurrency, EngineError, SyncEngine};
use ent_store::{Auth, HttpConfigStore};

/// Build the engine from configuration: HTTP store, explicit context, and
/// the merged suppression policy.
pub fn build_engine(config: &EntConfig) -> SyncEngine<HttpConfigStore> {
    let auth = match (
        &config.store.api_token,
        &config.store.username,
        &config.store.password,
    ) {
        (Some(token), _, _) => Auth::Bearer(token.clone()),
        (None, Some(username), Some(password)) => Auth::Basic {
            username: username.clone(),
            password: password.clone(),
        },
        _ => Auth::None,
    };
    let store = HttpConfigStore::new(&config.store.base_url, auth, config.store.timeout_secs);
    let context = SyncContext::new(
        config.sync.deployment,
        &config.store.base_url,
        config.store.operator(),
    );
    SyncEngine::new(store, context, config.sync.policy())
}

/// Resolve export concurrency: CLI flags win over config; config `0` means
/// unbounded.
pub fn resolve_concurrency(
    config: &EntConfig,
    flag: Option<usize>,
    unbounded: bool,
) -> Concurrency {
    if unbounded {
        return Concurrency::Unbounded;
    }
    match flag.unwrap_or(config.sync.concurrency) {
        0 => Concurrency::Unbounded,
        n => Concurrency::Bounded(n),
    }
}

/// Print every wrapped per-item failure before surfacing a batch error.
pub fn report_engine_error(error: &EngineError) {
    if let Some(aggregate) = error.aggregate() {
        for item in &aggregate.errors {
            eprintln!("  - {item}");
        }
    }
}
