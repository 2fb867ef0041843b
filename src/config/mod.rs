// ABOUTME: Configuration management module for the recipe search client
// ABOUTME: Loads API credentials, retry policy, and HTTP transport settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: Upstream API endpoint and credentials
//! - **Network**: Retry budget and HTTP client timeouts

/// Upstream API configuration from environment variables
pub mod environment;
/// Retry and HTTP transport configuration
pub mod network;

pub use environment::RecipeApiConfig;
pub use network::{HttpClientConfig, RetryConfig};
