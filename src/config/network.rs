// ABOUTME: Network configuration for the recipe fetcher
// ABOUTME: Fixed-delay retry budget for rate-limited responses and opt-in HTTP client timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::{env_config, retry};
use recipe_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::environment::{env_parse_opt, env_parse_or};

/// Retry behavior for HTTP 429 responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of requests issued for a single fetch
    pub max_attempts: u32,
    /// Fixed wait between a 429 response and the next attempt
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: retry::DEFAULT_MAX_ATTEMPTS,
            delay_ms: retry::DEFAULT_DELAY_MS,
        }
    }
}

impl RetryConfig {
    /// Load retry configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not a valid number
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            max_attempts: env_parse_or(env_config::RETRY_MAX_ATTEMPTS, retry::DEFAULT_MAX_ATTEMPTS)?,
            delay_ms: env_parse_or(env_config::RETRY_DELAY_MS, retry::DEFAULT_DELAY_MS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Ensure at least one request is allowed
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `max_attempts` is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.max_attempts == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be at least 1",
                env_config::RETRY_MAX_ATTEMPTS
            )));
        }
        Ok(())
    }

    /// Delay between attempts as a `Duration`
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// HTTP client timeouts.
///
/// Both are unset by default: a fetch is bounded only by the retry budget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: Option<u64>,
}

impl HttpClientConfig {
    /// Load HTTP client configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not a valid number
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            timeout_secs: env_parse_opt(env_config::HTTP_TIMEOUT_SECS)?,
            connect_timeout_secs: env_parse_opt(env_config::HTTP_CONNECT_TIMEOUT_SECS)?,
        })
    }
}
