use crate::{CommandError, CommandResult};

use gh_config::LoggingConfig;

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Initialize logger with fern
///
/// Log records go to stderr so they never mix with command output on stdout.
///
/// # Arguments
/// * `logging` - Level filter and whether levels are colored
pub fn initialize(logging: &LoggingConfig) -> CommandResult<()> {
    let level_filter = logging.level.0;

    let dispatch = if logging.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = colors.color(record.level()),
                message = message,
                target = record.target(),
            ))
        })
    } else {
        Dispatch::new().format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = record.level(),
                message = message,
                target = record.target(),
            ))
        })
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch.chain(std::io::stderr()))
        .apply()
        .map_err(|e| CommandError::Logger {
            message: e.to_string(),
        })?;

    debug!("Logger initialized: level={level_filter:?}, stderr");
    Ok(())
}
