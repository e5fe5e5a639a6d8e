use clap::Parser;

mod cli;
mod commands;
mod progress;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("ents error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = ent_config::EntConfig::load_with_dotenv()?;
    config.store.require_configured()?;

    let progress = progress::Progress::new(cli.quiet, cli.no_progress);

    match &cli.command {
        cli::Commands::Export(args) => commands::export::handle(args, &config, &progress).await,
        cli::Commands::Import(args) => commands::import::handle(args, &config, &progress).await,
        cli::Commands::Delete(args) => commands::delete::handle(args, &config, &progress).await,
        cli::Commands::Types => commands::types::handle(&config).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ENTSYNC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
