//! Application settings loaded from `config.toml` with environment overrides.
//!
//! The settings file is optional: when it is absent every section falls back to its
//! defaults. `HOST` and `PORT` from the environment (or `.env`) take precedence over
//! the file so deployments can move the listener without editing it.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Scannable code rendering settings
    #[serde(default)]
    pub codes: CodeConfig,
}

/// Where the HTTP server listens
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `0.0.0.0`
    pub host: String,
    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// QR rendering settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CodeConfig {
    /// Minimum width and height of the rendered code, in pixels
    pub min_dimension: u32,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self { min_dimension: 200 }
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or a field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

fn parse_config(contents: &str) -> std::result::Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads `./config.toml` if present, otherwise defaults, then applies environment overrides.
///
/// # Errors
/// Returns an error if the file exists but cannot be parsed, or if `PORT` is not a valid port.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = Path::new("config.toml");
    let mut config = if path.exists() {
        load_config(path)?
    } else {
        info!("No config.toml found, using default settings.");
        AppConfig::default()
    };

    apply_overrides(
        &mut config,
        std::env::var("HOST").ok(),
        std::env::var("PORT").ok(),
    )?;
    Ok(config)
}

fn apply_overrides(
    config: &mut AppConfig,
    host: Option<String>,
    port: Option<String>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port.trim().parse().map_err(|e| Error::Config {
            message: format!("Invalid PORT value '{port}': {e}"),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [codes]
            min_dimension = 320
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.codes.min_dimension, 320);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = parse_config("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.codes, CodeConfig::default());

        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(parse_config("[server]\nport = \"not a port\"\n").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("definitely/not/here/config.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, Some("127.0.0.1".to_string()), Some("6000".to_string()))
            .unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:6000");

        let result = apply_overrides(&mut config, None, Some("nope".to_string()));
        assert!(matches!(result, Err(Error::Config { message: _ })));
        assert_eq!(config.server.port, 6000);
    }
}
