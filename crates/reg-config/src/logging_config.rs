use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel, env};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored terminal output; ignored when writing to a file
    pub colored: bool,
    /// Log file name inside `dir`; None logs to stdout
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    pub(crate) fn apply_env(&mut self) {
        if let Ok(value) = std::env::var("REG_LOG_LEVEL") {
            self.level = LogLevel::parse(&value);
        }
        env::override_bool("REG_LOG_COLORED", &mut self.colored);
        env::override_option("REG_LOG_FILE", &mut self.file);
    }

    /// Where the log file goes when one is configured:
    /// `<config dir>/<dir>/<file>`
    pub fn file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|name| config_dir.join(&self.dir).join(name))
    }
}
