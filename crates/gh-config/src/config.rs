use crate::{
    CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult, HostConfig, LoggingConfig,
    PromptConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub host: HostConfig,
    pub prompt: PromptConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for GH_CONFIG_DIR env var, else use `<config dir>/gh`
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply GH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load from an explicit directory, still applying env overrides.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GH_CONFIG_DIR env var > platform config dir + "gh"
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("GH_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.host.validate()?;
        Ok(())
    }

    /// Host commands talk to unless they pin their own.
    pub fn default_host(&self) -> &str {
        &self.host.name
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  host: {} (token: {})",
            self.host.name,
            if self.host.token.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        debug!(
            "  prompt: {}",
            if self.prompt.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        debug!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Host
        Self::apply_env_string("GH_HOST", &mut self.host.name);
        Self::apply_env_option_string("GITHUB_TOKEN", &mut self.host.token);
        Self::apply_env_option_string("GH_TOKEN", &mut self.host.token);

        // Prompt
        if let Ok(val) = std::env::var("GH_PROMPT_DISABLED")
            && (val == "true" || val == "1")
        {
            self.prompt.enabled = false;
        }

        // Logging
        Self::apply_env_parse("GH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GH_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// Empty values are ignored.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }
}
