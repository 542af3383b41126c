//! Configuration errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file or an environment override could not be read into [`crate::AppConfig`]
    #[error("cannot load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A setting parsed but is out of range
    #[error("invalid `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("cannot write configuration: {0}")]
    Write(#[from] toml::ser::Error),
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key,
            reason: reason.into(),
        }
    }
}
