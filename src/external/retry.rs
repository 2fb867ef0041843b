// ABOUTME: Fixed-delay retry loop for HTTP 429 responses from the recipe API
// ABOUTME: Any other status or a transport failure ends the loop immediately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::retry::RATE_LIMITED_STATUS;
use recipe_core::errors::FetchError;
use std::time::Duration;
use tracing::{debug, warn};

use super::transport::{RecipeTransport, TransportResponse};
use crate::config::RetryConfig;

/// Retry budget for one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of requests, including the first
    pub max_attempts: u32,
    /// Fixed wait after each rate-limited response
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a policy; a zero attempt budget is raised to one
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, config.delay())
    }
}

/// Issue a GET, retrying while the response is HTTP 429.
///
/// There is no jitter and no cancellation: once started the loop runs until a
/// non-429 response arrives or the budget is spent. The wait after the final
/// rate-limited attempt is skipped since nothing would follow it.
///
/// # Errors
///
/// - [`FetchError::Network`] from the transport, without retrying
/// - [`FetchError::RateLimitExhausted`] when every attempt was rate limited
pub async fn send_with_retry(
    transport: &dyn RecipeTransport,
    url: &str,
    policy: RetryPolicy,
) -> Result<TransportResponse, FetchError> {
    let mut attempt = 0;
    while attempt < policy.max_attempts {
        let response = transport.get(url).await?;
        attempt += 1;

        if response.status != RATE_LIMITED_STATUS {
            debug!(attempt, status = response.status, "Received terminal response");
            return Ok(response);
        }

        if attempt == policy.max_attempts {
            break;
        }

        let delay_ms = policy.delay.as_millis();
        let max_attempts = policy.max_attempts;
        warn!("Rate limit hit ({attempt}/{max_attempts}). Retrying in {delay_ms}ms...");
        tokio::time::sleep(policy.delay).await;
    }

    warn!(
        attempts = attempt,
        "Rate limit persisted for the whole retry budget"
    );
    Err(FetchError::RateLimitExhausted { attempts: attempt })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_default_config() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 50);
        assert_eq!(policy.delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_zero_budget_is_raised_to_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
    }
}
