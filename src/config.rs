//! Portal host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment value could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    /// Base URL of the school backend, without a trailing `/`.
    pub backend_url: String,
    pub proxy_timeout: Duration,
}

impl PortalConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8080`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;

        let backend_url = get("BACKEND_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        let backend_url = backend_url.trim_end_matches('/').to_owned();
        let scheme_ok = reqwest::Url::parse(&backend_url)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !scheme_ok {
            return Err(ConfigError::Invalid { var: "BACKEND_URL", value: backend_url });
        }

        let timeout_secs = parse_or("PROXY_TIMEOUT_SECS", get("PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "PROXY_TIMEOUT_SECS", value: "0".into() });
        }

        Ok(Self { port, backend_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
