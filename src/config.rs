use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
    pub intake: IntakeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntakeConfig {
    /// Promised response time quoted in the order confirmation
    pub contact_window_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                log_level: "info".to_string(),
                log_format: "pretty".to_string(),
            },
            metrics: MetricsConfig {
                enabled: true,
                endpoint: "/metrics".to_string(),
            },
            intake: IntakeConfig {
                contact_window_minutes: 30,
            },
        }
    }
}

/// Load configuration from defaults, the optional TOML file at `path`, and
/// `BOOST_DESK__*` environment variables (in increasing priority).
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let defaults = Config::default();

    let config = config::Config::builder()
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("server.log_level", defaults.server.log_level)?
        .set_default("server.log_format", defaults.server.log_format)?
        .set_default("metrics.enabled", defaults.metrics.enabled)?
        .set_default("metrics.endpoint", defaults.metrics.endpoint)?
        .set_default(
            "intake.contact_window_minutes",
            i64::from(defaults.intake.contact_window_minutes),
        )?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("BOOST_DESK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.trim().is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be between 1 and 65535");
    }

    match cfg.server.log_format.as_str() {
        "pretty" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}' (expected 'pretty' or 'json')", other),
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!(
            "Metrics endpoint must start with '/', got '{}'",
            cfg.metrics.endpoint
        );
    }

    if cfg.intake.contact_window_minutes == 0 {
        anyhow::bail!("Contact window must be at least one minute");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_port_zero() {
        let mut cfg = Config::default();
        cfg.server.port = 0;

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("port"));
    }

    #[test]
    fn test_validate_config_rejects_unknown_log_format() {
        let mut cfg = Config::default();
        cfg.server.log_format = "xml".to_string();

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("Invalid log format 'xml'"));
    }

    #[test]
    fn test_validate_config_metrics_endpoint() {
        let mut cfg = Config::default();
        cfg.metrics.endpoint = "metrics".to_string();
        assert!(validate_config(&cfg).is_err());

        // disabled metrics do not care about the endpoint
        cfg.metrics.enabled = false;
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_validate_config_contact_window() {
        let mut cfg = Config::default();
        cfg.intake.contact_window_minutes = 0;
        assert!(validate_config(&cfg).is_err());
    }
}
