use anyhow::Context;
use ent_config::EntConfig;
use ent_engine::ExportOptions;

use crate::cli::ExportArgs;
use crate::commands::{build_engine, resolve_concurrency};
use crate::progress::Progress;

/// Handle `ents export`.
pub async fn handle(
    args: &ExportArgs,
    config: &EntConfig,
    progress: &Progress,
) -> anyhow::Result<()> {
    let engine = build_engine(config);
    let options = ExportOptions {
        concurrency: resolve_concurrency(config, args.concurrency, args.unbounded),
    };

    let bundle = engine.export_all(options, progress).await?;

    let json = serde_json::to_string_pretty(&bundle).context("failed to serialize bundle")?;
    match &args.file {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write bundle to {}", path.display()))?;
            eprintln!("wrote {} entities to {}", bundle.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
