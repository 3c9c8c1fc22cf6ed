use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOSTNAME, LOCALHOST, MAX_HOSTNAME_LENGTH};

/// GraphQL and REST base URLs for one platform host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub graphql: String,
    /// Always ends with '/'
    pub rest: String,
}

impl ApiEndpoints {
    /// Resolve the API endpoints for a hostname.
    ///
    /// - `github.com` (and its subdomains) use `api.github.com`
    /// - `github.localhost` uses plain HTTP on `api.github.localhost`
    /// - anything else is treated as an enterprise host serving `/api/...`
    pub fn for_host(hostname: &str) -> Self {
        let host = normalize_hostname(hostname);

        if host == LOCALHOST {
            Self {
                graphql: format!("http://api.{host}/graphql"),
                rest: format!("http://api.{host}/"),
            }
        } else if host == DEFAULT_HOSTNAME {
            Self {
                graphql: format!("https://api.{host}/graphql"),
                rest: format!("https://api.{host}/"),
            }
        } else {
            Self {
                graphql: format!("https://{host}/api/graphql"),
                rest: format!("https://{host}/api/v3/"),
            }
        }
    }

    /// Endpoints rooted at an arbitrary base URL (mock servers, proxies).
    pub fn from_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            graphql: format!("{base}/graphql"),
            rest: format!("{base}/"),
        }
    }
}

fn normalize_hostname(hostname: &str) -> String {
    let host = hostname.trim().to_lowercase();
    if host.ends_with(&format!(".{DEFAULT_HOSTNAME}")) {
        return String::from(DEFAULT_HOSTNAME);
    }
    if host.ends_with(&format!(".{LOCALHOST}")) {
        return String::from(LOCALHOST);
    }
    host
}

/// Reject hostnames that are empty or look like URLs.
#[track_caller]
pub fn validate_hostname(hostname: &str) -> ConfigErrorResult<()> {
    if hostname.trim().is_empty() {
        return Err(ConfigError::host("a value is required"));
    }
    if hostname.contains('/') || hostname.contains(':') {
        return Err(ConfigError::host("invalid hostname"));
    }
    if hostname.len() > MAX_HOSTNAME_LENGTH {
        return Err(ConfigError::host(format!(
            "hostname must be at most {MAX_HOSTNAME_LENGTH} characters"
        )));
    }
    Ok(())
}
