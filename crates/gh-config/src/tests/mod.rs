
use std::env;

use tempfile::TempDir;

const GH_ENV_VARS: [&str; 7] = [
    "GH_CONFIG_DIR",
    "GH_HOST",
    "GH_TOKEN",
    "GITHUB_TOKEN",
    "GH_PROMPT_DISABLED",
    "GH_LOG_LEVEL",
    "GH_LOG_COLORED",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clear every GH_* override, then point GH_CONFIG_DIR at a fresh temp dir
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let mut guards: Vec<EnvGuard> = GH_ENV_VARS.iter().map(|k| EnvGuard::remove(*k)).collect();
    let temp = TempDir::new().unwrap();
    guards.push(EnvGuard::set("GH_CONFIG_DIR", temp.path().to_str().unwrap()));
    (temp, guards)
}
