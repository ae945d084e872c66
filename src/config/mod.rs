/// Database configuration and connection management
pub mod database;

/// Server and code-rendering settings from config.toml and the environment
pub mod settings;

pub use settings::{AppConfig, load_app_configuration};
