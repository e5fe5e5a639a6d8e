use anyhow::Context;
use ent_config::EntConfig;
use ent_core::ExportBundle;
use ent_engine::ImportOptions;

use crate::cli::ImportArgs;
use crate::commands::{build_engine, report_engine_error};
use crate::progress::Progress;

/// Handle `ents import`.
pub async fn handle(
    args: &ImportArgs,
    config: &EntConfig,
    progress: &Progress,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read bundle from {}", args.file.display()))?;
    let bundle: ExportBundle = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid bundle", args.file.display()))?;

    let engine = build_engine(config);
    let options = ImportOptions {
        validate: args.validate,
    };

    match engine.import_all(&bundle, options, progress).await {
        Ok(applied) => {
            eprintln!("imported {} of {} entities", applied.len(), bundle.len());
            Ok(())
        }
        Err(error) => {
            report_engine_error(&error);
            Err(error.into())
        }
    }
}
