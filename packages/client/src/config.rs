//! Client configuration, populated from environment variables.

use std::time::Duration;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.neynar.com";

/// Errors raised while reading configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// What the provisioning entry point does with a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log the error and resolve to "no signer".
    #[default]
    Lenient,
    /// Return the error to the caller.
    Strict,
}

/// Runtime configuration for a [`crate::NeynarClient`].
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `NEYNAR_API_KEY` | (required) | API key sent as the `api_key` header |
/// | `NEYNAR_BASE_URL` | `https://api.neynar.com` | Base URL override (no trailing `/v1` or `/v2`) |
/// | `NEYNAR_TIMEOUT_SECS` | `30` | Per-request timeout |
/// | `NEYNAR_STRICT_ERRORS` | `false` | `true` or `1` selects [`ErrorPolicy::Strict`] |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,

    /// Scheme + host (+ optional path prefix), without a trailing slash.
    pub base_url: String,

    pub timeout: Duration,

    pub error_policy: ErrorPolicy,
}

impl ClientConfig {
    /// Defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            error_policy: ErrorPolicy::default(),
        }
    }

    /// Point the client at another host (a proxy, or a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = var("NEYNAR_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("NEYNAR_API_KEY"))?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = var("NEYNAR_BASE_URL") {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(ConfigError::Invalid {
                    var: "NEYNAR_BASE_URL",
                    value: base_url,
                });
            }
            config = config.with_base_url(base_url);
        }

        if let Some(raw) = var("NEYNAR_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: "NEYNAR_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = var("NEYNAR_STRICT_ERRORS") {
            config.error_policy = match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => ErrorPolicy::Strict,
                "0" | "false" | "no" | "" => ErrorPolicy::Lenient,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "NEYNAR_STRICT_ERRORS",
                        value: raw,
                    })
                }
            };
        }

        Ok(config)
    }
}
