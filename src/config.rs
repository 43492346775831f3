//! API client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and validated once when `App`
//! builds the shared client.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";
pub const DEFAULT_ACCESS_TOKEN_KEY: &str = "accessToken";
pub const DEFAULT_API_TIMEOUT_MS: u32 = 10_000;

/// Errors raised while validating build-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORTAL_API_BASE_URL '{0}': expected http://, https:// or a leading '/'")]
    InvalidBaseUrl(String),
    #[error("PORTAL_ACCESS_TOKEN_KEY must not be empty")]
    EmptyTokenKey,
    #[error("invalid PORTAL_API_TIMEOUT_MS '{0}': expected a positive integer")]
    InvalidTimeout(String),
}

/// Settings for the shared authenticated HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub access_token_key: String,
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            access_token_key: DEFAULT_ACCESS_TOKEN_KEY.to_owned(),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `PORTAL_API_BASE_URL`: default `http://127.0.0.1:8000/api/v1`
    /// - `PORTAL_ACCESS_TOKEN_KEY`: default `accessToken`
    /// - `PORTAL_API_TIMEOUT_MS`: default 10000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any provided value fails validation.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::parse(
            option_env!("PORTAL_API_BASE_URL"),
            option_env!("PORTAL_ACCESS_TOKEN_KEY"),
            option_env!("PORTAL_API_TIMEOUT_MS"),
        )
    }

    /// Validate raw values, substituting defaults for absent ones.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any provided value fails validation.
    pub fn parse(
        base_url: Option<&str>,
        access_token_key: Option<&str>,
        timeout_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url.unwrap_or(DEFAULT_API_BASE_URL))?;

        let access_token_key = access_token_key.unwrap_or(DEFAULT_ACCESS_TOKEN_KEY).trim();
        if access_token_key.is_empty() {
            return Err(ConfigError::EmptyTokenKey);
        }

        let timeout_ms = match timeout_ms {
            Some(raw) => parse_timeout(raw)?,
            None => DEFAULT_API_TIMEOUT_MS,
        };

        Ok(Self { base_url, access_token_key: access_token_key.to_owned(), timeout_ms })
    }

    /// Join the base URL and a resource path with exactly one `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let valid = trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.starts_with('/');
    if !valid {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}

fn parse_timeout(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
