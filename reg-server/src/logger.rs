use crate::error::{Result as ServerErrorResult, ServerError};

use reg_config::LoggingConfig;

use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// Wire up the `log` facade for the process.
///
/// Output goes to stdout, or to `<config dir>/<dir>/<file>` when a log file
/// is configured; file output is never colored. Also installs the
/// tracing-to-log bridge so axum's internals land in the same sink.
pub fn initialize(logging: &LoggingConfig, config_dir: &Path) -> ServerErrorResult<()> {
    let file_path = logging.file_path(config_dir);

    let dispatch = Dispatch::new().level(logging.level.0);
    let dispatch = match &file_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ServerError::Logger {
                    message: format!("Cannot create log directory {}: {e}", parent.display()),
                })?;
            }
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Cannot open log file {}: {e}", path.display()),
            })?;
            dispatch.format(line_format(None)).chain(file)
        }
        None if logging.colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            dispatch
                .format(line_format(Some(colors)))
                .chain(std::io::stdout())
        }
        None => dispatch.format(line_format(None)).chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Logger already initialized: {e}"),
    })?;

    tracing_log::LogTracer::init().ok();

    match &file_path {
        Some(path) => info!("Logging to {} at {}", path.display(), *logging.level),
        None => info!("Logging to stdout at {}", *logging.level),
    }

    Ok(())
}

/// One log line: timestamp, (optionally colored) level, message, call site
fn line_format(
    colors: Option<ColoredLevelConfig>,
) -> impl Fn(fern::FormatCallback, &std::fmt::Arguments, &Record) + Sync + Send + 'static {
    move |out, message, record| {
        let level = match colors {
            Some(colors) => colors.color(record.level()).to_string(),
            None => record.level().to_string(),
        };
        out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            humantime::format_rfc3339(SystemTime::now()),
            level,
            message,
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        ))
    }
}
