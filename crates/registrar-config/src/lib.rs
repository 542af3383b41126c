//! Registrar Configuration Management
//!
//! Loads server settings from a TOML file layered under `REGISTRAR_*`
//! environment variables, validates them and writes them back out.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    AppConfig, AuthConfig, ConfigManager as ConfigManagerTrait, DemoConfig, LogFormat,
    LoggingConfig, ServerConfig,
};
