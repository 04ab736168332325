//! Client configuration.
//!
//! Settings come from defaults, then environment variables, then command-line
//! flags, each layer overriding the previous one.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_URL: &str = "MEDIAHUB_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "MEDIAHUB_TIMEOUT_SECS";
pub const ENV_MAX_DEPTH: &str = "MEDIAHUB_MAX_DEPTH";

/// Configuration for talking to the MediaHub backend.
///
/// # Example
///
/// ```ignore
/// use mediahub::config::ClientConfig;
///
/// let config = ClientConfig::from_env()?
///     .with_api_url("http://media.local/api/");
/// assert_eq!(config.api_url, "http://media.local/api");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Longest ancestor chain the breadcrumb resolver will walk, if capped
    pub max_breadcrumb_depth: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_breadcrumb_depth: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. Trailing slashes are trimmed.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_max_breadcrumb_depth(mut self, depth: usize) -> Self {
        self.max_breadcrumb_depth = Some(depth);
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Build a config from `MEDIAHUB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset or blank keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config = config.with_api_url(url.trim());
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            config.request_timeout_secs = parse_positive(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = get(ENV_MAX_DEPTH) {
            config.max_breadcrumb_depth = Some(parse_positive(ENV_MAX_DEPTH, &raw)?);
        }

        Ok(config)
    }
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            expected: "a positive integer",
        }),
    }
}
