use ent_config::EntConfig;

use crate::commands::build_engine;

/// Handle `ents types`.
pub async fn handle(config: &EntConfig) -> anyhow::Result<()> {
    let engine = build_engine(config);
    for entity_type in engine.list_types().await? {
        println!("{entity_type}");
    }
    Ok(())
}
