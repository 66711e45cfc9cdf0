use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn categorized(category: &'static str, message: impl Into<String>) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Startup failure not tied to one config section
    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::categorized("Config", message)
    }

    /// The `[server]` section failed validation
    #[track_caller]
    pub fn server(message: impl Into<String>) -> Self {
        Self::categorized("Server", message)
    }

    /// The `[sheets]` section failed validation
    #[track_caller]
    pub fn sheets(message: impl Into<String>) -> Self {
        Self::categorized("Sheets", message)
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
