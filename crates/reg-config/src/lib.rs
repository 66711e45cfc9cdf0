mod config;
mod env;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod sheets_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sheets_config::{ServiceAccountKey, SheetsConfig};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_SHEETS_RANGE: &str = "Sheet1!A1";
const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
