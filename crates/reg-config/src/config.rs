use crate::{ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig, SheetsConfig};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Startup configuration, resolved once before the server starts serving.
///
/// Values come from `<config dir>/config.toml` when present; `REG_*`
/// environment variables then override individual fields. `validate()` runs
/// the startup checks so a missing spreadsheet id or service-account key
/// never turns into a per-request failure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub sheets: SheetsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Resolve configuration: file first, then environment overrides.
    ///
    /// The config directory is created when missing so a first run has a
    /// place for its config.toml and logs. Does not validate; call
    /// `validate()` on the result.
    pub fn load() -> ConfigErrorResult<Self> {
        let dir = Self::config_dir()?;
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| ConfigError::Io {
                path: dir.clone(),
                source: e,
            })?;
        }

        let path = dir.join("config.toml");
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.server.apply_env();
        config.sheets.apply_env();
        config.logging.apply_env();

        Ok(config)
    }

    fn from_file(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `REG_CONFIG_DIR` when set, else `./.reg` under the working directory
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("REG_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".reg"))
    }

    /// Startup checks across all sections
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.sheets.validate()?;
        Ok(())
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration. Never logs the service-account key.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  sheets: id={}, range={}",
            self.sheets.spreadsheet_id, self.sheets.range
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }
}
