use clap::Parser;
use std::path::PathBuf;

use shoreline::{Config, logging};

#[derive(Parser)]
#[command(name = "shoreline")]
#[command(about = "Record and browse coastal restoration projects")]
struct Cli {
    /// Path to a TOML config file (defaults to ./shoreline.toml if present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "shoreline=debug"
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Start with an empty project list
    #[arg(long)]
    no_seed: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut config = Config::load_from(args.config.as_ref())?;
    if let Some(filter) = args.log {
        config.log.filter = filter;
    }
    if args.no_seed {
        config.catalog.seed = false;
    }

    logging::init(&config.log.filter)?;
    tracing::info!(
        seed = config.catalog.seed,
        strict = config.wizard.require_complete_draft,
        "Starting shoreline"
    );

    shoreline::gui::run(config)?;
    Ok(())
}
