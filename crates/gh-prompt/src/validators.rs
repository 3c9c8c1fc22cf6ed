//! Reusable answer validators.

use gh_config::ConfigError;

/// Reject blank answers
pub fn required(answer: &str) -> Result<(), String> {
    if answer.trim().is_empty() {
        return Err(String::from("a value is required"));
    }
    Ok(())
}

/// Accept a bare hostname (no scheme, path or port)
pub fn hostname(answer: &str) -> Result<(), String> {
    gh_config::validate_hostname(answer).map_err(|e| match e {
        ConfigError::Generic { message, .. } => message,
        other => other.to_string(),
    })
}

/// Reject answers longer than `max` characters
pub fn max_length(max: usize) -> impl Fn(&str) -> Result<(), String> {
    move |answer: &str| {
        let len = answer.chars().count();
        if len > max {
            return Err(format!("must be at most {max} characters, got {len}"));
        }
        Ok(())
    }
}
