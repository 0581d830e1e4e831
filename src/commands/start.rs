use anyhow::Result;
use boost_desk::{config, init_tracing, server};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Execute the start command
///
/// Loads configuration, initializes logging from it, then serves until a
/// shutdown signal arrives.
pub async fn execute(config_path: PathBuf) -> Result<()> {
    println!("{}", "Starting boost-desk...".green());

    let cfg = config::load_config(&config_path)?;
    init_tracing(&cfg.server.log_level, &cfg.server.log_format);

    info!(config = %config_path.display(), "Starting Boost Desk");

    // Blocks until shutdown
    server::start_server(cfg, config_path).await?;

    Ok(())
}
