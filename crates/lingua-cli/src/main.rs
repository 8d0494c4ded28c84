//! Main entry point for the `lingua` command.

use anyhow::{Context, Result};
use clap::Parser;
use lingua_cli::{execute, Cli};
use lingua_common::{init_logging, with_startup_logging};
use lingua_config::ConfigLoader;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let startup_level = cli.log_level.as_deref().unwrap_or("info");
    let config = with_startup_logging(startup_level, || ConfigLoader::new(&cli.config).load())
        .with_context(|| format!("Invalid configuration {}", cli.config.display()))?;

    let mut logging = config.logging.to_logging_config()?;
    if let Some(level) = &cli.log_level {
        logging.level.clone_from(level);
    }
    init_logging(&logging)?;

    info!("Starting lingua with locales {:?}", config.i18n.locale_list);

    let stdout = std::io::stdout();
    if let Err(e) = execute(&cli.command, &config.i18n, &mut stdout.lock()) {
        error!("Command failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
