// ABOUTME: Shared test utilities for recipe finder integration tests
// ABOUTME: Provides a scripted mock transport, hit list fixtures, and fetcher setup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
//! Shared test utilities for `recipe_finder`

use async_trait::async_trait;
use recipe_finder::config::{RecipeApiConfig, RetryConfig};
use recipe_finder::errors::FetchError;
use recipe_finder::external::{RecipeFetcher, RecipeTransport, TransportResponse};
use recipe_finder::session::RecipeSession;
use recipe_finder::store::RecipeStore;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use tokio::sync::Notify;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet test logging once per process
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Transport that replays scripted responses and records every request URL.
///
/// When the script runs out, the fallback response is returned for every
/// further request.
pub struct MockTransport {
    script: Mutex<VecDeque<Result<TransportResponse, FetchError>>>,
    fallback: TransportResponse,
    urls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new(fallback: TransportResponse) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            urls: Mutex::new(Vec::new()),
        }
    }

    /// Transport that always answers with `response`
    pub fn always(response: TransportResponse) -> Arc<Self> {
        Arc::new(Self::new(response))
    }

    /// Transport that answers from `script` in order, then with `fallback`
    pub fn scripted(
        script: Vec<Result<TransportResponse, FetchError>>,
        fallback: TransportResponse,
    ) -> Arc<Self> {
        let transport = Self::new(fallback);
        *transport.script.lock().unwrap() = script.into();
        Arc::new(transport)
    }

    pub fn request_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn last_url(&self) -> Option<String> {
        self.urls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl RecipeTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        self.urls.lock().unwrap().push(url.to_owned());
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}

/// Transport that holds each request until its route is released.
///
/// A route matches when its URL fragment appears in the request URL; the
/// request then waits on the route's gate before returning the response.
pub struct GatedTransport {
    routes: Mutex<Vec<(String, Arc<Notify>, TransportResponse)>>,
    arrived: AtomicUsize,
    arrival: Notify,
}

impl GatedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            routes: Mutex::new(Vec::new()),
            arrived: AtomicUsize::new(0),
            arrival: Notify::new(),
        })
    }

    /// Register a response for URLs containing `fragment`; returns its gate
    pub fn route(&self, fragment: &str, response: TransportResponse) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.routes
            .lock()
            .unwrap()
            .push((fragment.to_owned(), gate.clone(), response));
        gate
    }

    /// Wait until `count` requests are parked at their gates
    pub async fn wait_for_requests(&self, count: usize) {
        loop {
            let notified = self.arrival.notified();
            if self.arrived.load(Ordering::SeqCst) >= count {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl RecipeTransport for GatedTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        let (gate, response) = {
            let routes = self.routes.lock().unwrap();
            let (_, gate, response) = routes
                .iter()
                .find(|(fragment, _, _)| url.contains(fragment.as_str()))
                .unwrap_or_else(|| panic!("no route for {url}"));
            (gate.clone(), response.clone())
        };
        self.arrived.fetch_add(1, Ordering::SeqCst);
        self.arrival.notify_waiters();
        gate.notified().await;
        Ok(response)
    }
}

pub fn response(status: u16, status_text: &str, body: &str) -> TransportResponse {
    TransportResponse {
        status,
        status_text: status_text.to_owned(),
        body: body.to_owned(),
    }
}

pub fn ok(body: &str) -> TransportResponse {
    response(200, "OK", body)
}

pub fn rate_limited() -> TransportResponse {
    response(429, "Too Many Requests", "")
}

/// Search response body with one hit per label
pub fn hits_body(labels: &[&str]) -> String {
    let hits: Vec<_> = labels
        .iter()
        .map(|label| {
            json!({
                "recipe": {
                    "label": label,
                    "image": format!("https://img.example/{}.jpg", label.to_lowercase()),
                    "ingredientLines": ["1 cup water"]
                }
            })
        })
        .collect();
    json!({ "hits": hits }).to_string()
}

pub fn empty_body() -> String {
    json!({ "hits": [] }).to_string()
}

/// Configuration with fixed test credentials and no retry delay
pub fn test_config() -> RecipeApiConfig {
    RecipeApiConfig::new("test-id", "test-key").with_retry(RetryConfig {
        max_attempts: 50,
        delay_ms: 0,
    })
}

pub fn test_fetcher<T: RecipeTransport + 'static>(transport: Arc<T>) -> RecipeFetcher {
    init_test_logging();
    RecipeFetcher::new(test_config(), transport)
}

pub fn test_session<T: RecipeTransport + 'static>(transport: Arc<T>) -> RecipeSession {
    RecipeSession::new(test_fetcher(transport), RecipeStore::new())
}
