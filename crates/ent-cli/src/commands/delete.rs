use anyhow::bail;
use ent_config::EntConfig;

use crate::cli::DeleteArgs;
use crate::commands::{build_engine, report_engine_error};
use crate::progress::Progress;

/// Handle `ents delete`.
pub async fn handle(
    args: &DeleteArgs,
    config: &EntConfig,
    progress: &Progress,
) -> anyhow::Result<()> {
    if !args.yes {
        bail!(
            "refusing to delete from {} without --yes",
            config.store.base_url
        );
    }

    let engine = build_engine(config);
    let result = match &args.entity_type {
        Some(entity_type) => engine.delete_all_of_type(entity_type, progress).await,
        None => engine.delete_all(progress).await,
    };

    match result {
        Ok(deleted) => {
            eprintln!("deleted {} entities", deleted.len());
            Ok(())
        }
        Err(error) => {
            report_engine_error(&error);
            Err(error.into())
        }
    }
}
