mod api_endpoints;
mod config;
mod error;
mod host_config;
mod log_level;
mod logging_config;
mod prompt_config;

#[cfg(test)]
mod tests;

pub use api_endpoints::{ApiEndpoints, validate_hostname};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use host_config::HostConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use prompt_config::PromptConfig;

pub const DEFAULT_HOSTNAME: &str = "github.com";
pub const LOCALHOST: &str = "github.localhost";

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR_NAME: &str = "gh";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_PROMPT_ENABLED: bool = true;
const MAX_HOSTNAME_LENGTH: usize = 253;
