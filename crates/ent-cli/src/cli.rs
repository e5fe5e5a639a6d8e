use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `ents` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ents",
    version,
    about = "entsync - bulk synchronization for remote configuration entities"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress bars
    #[arg(long, global = true)]
    pub no_progress: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export every configuration entity into a bundle
    Export(ExportArgs),

    /// Import a bundle back into the store
    Import(ImportArgs),

    /// Delete configuration entities (all, or one type)
    Delete(DeleteArgs),

    /// List entity types known to the store
    Types,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Refetch worker-pool size (overrides config)
    #[arg(long, conflicts_with = "unbounded")]
    pub concurrency: Option<usize>,

    /// Launch every refetch at once instead of using the worker pool
    #[arg(long)]
    pub unbounded: bool,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Bundle file to import
    #[arg(short, long)]
    pub file: PathBuf,

    /// Validate embedded script hooks before each upsert
    #[arg(long)]
    pub validate: bool,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Only delete entities of this type
    #[arg(short = 't', long = "type")]
    pub entity_type: Option<String>,

    /// Confirm deletion against the live store
    #[arg(long)]
    pub yes: bool,
}
