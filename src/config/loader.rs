//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides are applied after parsing, before validation.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: GatewayConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build a configuration from defaults plus environment overrides.
pub fn from_env() -> Result<GatewayConfig, ConfigError> {
    let mut config = GatewayConfig::default();
    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Environment variables recognized for deployment-time overrides:
/// `TODO_URL` (upstream endpoint), `SERVER_PORT` (listener port),
/// `LOG_LEVEL`.
fn apply_env_overrides(config: &mut GatewayConfig) {
    if let Ok(url) = std::env::var("TODO_URL") {
        config.upstream.base_url = url;
    }
    if let Ok(port) = std::env::var("SERVER_PORT") {
        if port.parse::<u16>().is_ok() {
            config.listener.bind_address = format!("0.0.0.0:{}", port);
        } else {
            tracing::warn!(port = %port, "Ignoring non-numeric SERVER_PORT");
        }
    }
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        config.observability.log_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [upstream]
            base_url = "http://todo:8081/api/todos/getTotalCategory"
        "#;
        let config: GatewayConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.upstream.base_url,
            "http://todo:8081/api/todos/getTotalCategory"
        );
        // Untouched sections keep their defaults.
        assert_eq!(config.timeouts.upstream_secs, 10);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [upstream]
            base_url = "http://localhost:8081/api/todos/getTotalCategory"
            max_response_bytes = 1048576

            [timeouts]
            request_secs = 15
            upstream_secs = 5

            [observability]
            log_level = "debug"
            metrics_enabled = false
        "#;
        let config: GatewayConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.upstream.max_response_bytes, 1048576);
        assert_eq!(config.timeouts.upstream_secs, 5);
        assert!(!config.observability.metrics_enabled);
    }
}
