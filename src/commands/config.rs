use anyhow::Result;
use boost_desk::config;
use colored::Colorize;
use std::path::Path;

/// Execute the config show command
///
/// Prints the effective configuration (defaults, file and environment merged)
pub fn show(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", toml::to_string_pretty(&cfg)?);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen: {}:{}", cfg.server.host, cfg.server.port);
    println!(
        "  Metrics: {}",
        if cfg.metrics.enabled {
            cfg.metrics.endpoint.as_str()
        } else {
            "disabled"
        }
    );

    Ok(())
}
