use crate::DEFAULT_PROMPT_ENABLED;

use serde::Deserialize;

/// Whether commands may fall back to interactive prompts for missing arguments
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub enabled: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_PROMPT_ENABLED,
        }
    }
}
