// ABOUTME: Environment-based configuration for the upstream recipe search API
// ABOUTME: Endpoint URL and credentials with presence and URL validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::{edamam, env_config};
use recipe_core::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::str::FromStr;
use url::Url;

use super::network::{HttpClientConfig, RetryConfig};

/// Upstream recipe API configuration.
///
/// Credentials are injected configuration; only their presence is checked.
#[derive(Clone, PartialEq, Eq)]
pub struct RecipeApiConfig {
    /// Recipe search endpoint (without query string)
    pub base_url: String,
    /// Application id credential
    pub app_id: String,
    /// Application key credential
    pub app_key: String,
    /// Retry budget for rate-limited responses
    pub retry: RetryConfig,
    /// HTTP client timeouts
    pub http: HttpClientConfig,
}

impl RecipeApiConfig {
    /// Configuration with the default endpoint, retry policy, and timeouts
    #[must_use]
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            base_url: edamam::DEFAULT_BASE_URL.to_owned(),
            app_id: app_id.into(),
            app_key: app_key.into(),
            retry: RetryConfig::default(),
            http: HttpClientConfig::default(),
        }
    }

    /// Override the endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if a credential is absent or empty, and
    /// `ConfigInvalid` if a value cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            base_url: env_var_or(env_config::BASE_URL, edamam::DEFAULT_BASE_URL),
            app_id: env::var(env_config::APP_ID).unwrap_or_default(),
            app_key: env::var(env_config::APP_KEY).unwrap_or_default(),
            retry: RetryConfig::from_env()?,
            http: HttpClientConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate credentials, endpoint, and retry policy
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found
    pub fn validate(&self) -> AppResult<()> {
        if self.app_id.trim().is_empty() {
            return Err(AppError::config_missing(env_config::APP_ID));
        }
        if self.app_key.trim().is_empty() {
            return Err(AppError::config_missing(env_config::APP_KEY));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            AppError::config_invalid(format!(
                "{} is not a valid URL: {}",
                env_config::BASE_URL,
                self.base_url
            ))
            .with_source(e)
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config_invalid(format!(
                "{} must use http or https, got '{}'",
                env_config::BASE_URL,
                url.scheme()
            )));
        }

        self.retry.validate()
    }
}

impl fmt::Debug for RecipeApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeApiConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("app_key", &"[REDACTED]")
            .field("retry", &self.retry)
            .field("http", &self.http)
            .finish()
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
pub(super) fn env_parse_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("{key} has invalid value '{raw}'")).with_source(e)
        }),
        Err(_) => Ok(default),
    }
}

/// Parse an optional environment variable; unset or blank means `None`
pub(super) fn env_parse_opt<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse().map(Some).map_err(|e| {
            AppError::config_invalid(format!("{key} has invalid value '{raw}'")).with_source(e)
        }),
        _ => Ok(None),
    }
}
