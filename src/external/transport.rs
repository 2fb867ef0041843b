// ABOUTME: HTTP transport abstraction for the recipe fetcher
// ABOUTME: Production reqwest implementation; mocks implement the same trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use recipe_core::errors::FetchError;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::config::HttpClientConfig;

/// A fully read HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status (may be empty)
    pub status_text: String,
    /// Response body text
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Minimal HTTP GET abstraction used by the fetcher.
///
/// Implementations report transport failures (DNS, connect, timeout, body
/// read) as [`FetchError::Network`]; every HTTP status, including errors, is
/// returned as a normal response.
#[async_trait]
pub trait RecipeTransport: Send + Sync {
    /// Issue a GET request and read the whole body
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError>;
}

/// Production transport using `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client; timeouts are applied only when configured
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the TLS backend cannot be initialized
    pub fn new(config: &HttpClientConfig) -> Result<Self, FetchError> {
        let mut builder = ClientBuilder::new();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(network_error)?;
        Ok(Self { client })
    }
}

/// Request URLs carry the application key, so they are stripped from
/// transport error text before it reaches logs or state.
fn network_error(error: reqwest::Error) -> FetchError {
    FetchError::Network(error.without_url().to_string())
}

#[async_trait]
impl RecipeTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        })
    }
}
