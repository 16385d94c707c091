/*
 * Responsibility
 * - Load settings from the environment (listen port, token service url/timeout, ...)
 * - Validate them up front (startup fails on bad values)
 */
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Startup fails with the offending key and the raw value it had.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {key}={value:?}")]
    Invalid { key: &'static str, value: String },
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
        }
    }

    #[cfg(test)]
    fn key(&self) -> &'static str {
        match self {
            Self::Invalid { key, .. } => key,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // Token service (read once at startup, never changed per call)
    pub oauth_base_url: Url,
    pub oauth_timeout: Duration,

    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (env in production, a map in tests).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid("PORT", raw))?,
            None => 3000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = get("APP_ENV")
            .map(|s| AppEnv::parse(&s))
            .unwrap_or(AppEnv::Development);

        let raw_base_url =
            get("OAUTH_BASE_URL").unwrap_or_else(|| "http://localhost:8080".to_string());
        let oauth_base_url = Url::parse(raw_base_url.trim())
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https"))
            .ok_or_else(|| ConfigError::invalid("OAUTH_BASE_URL", raw_base_url.as_str()))?;

        let oauth_timeout_ms = positive(&get, "OAUTH_TIMEOUT_MS", 200)?;
        let request_timeout_seconds = positive(&get, "REQUEST_TIMEOUT_SECONDS", 30)?;

        Ok(Self {
            addr,
            app_env,
            oauth_base_url,
            oauth_timeout: Duration::from_millis(oauth_timeout_ms),
            request_timeout: Duration::from_secs(request_timeout_seconds),
        })
    }
}

/// Optional non-zero integer setting. Present-but-unusable values are errors,
/// not a silent fallback to `default`.
fn positive(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    let Some(raw) = get(key) else {
        return Ok(default);
    };

    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ConfigError::invalid(key, raw))
}
