use crate::{ApiEndpoints, ConfigErrorResult, DEFAULT_HOSTNAME, validate_hostname};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Hostname of the platform instance (github.com or an enterprise host)
    pub name: String,
    /// API token. Never logged.
    pub token: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_HOSTNAME),
            token: None,
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_hostname(&self.name)
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::for_host(&self.name)
    }
}
