// ABOUTME: Edamam recipe search client - builds paged query URLs and maps responses to outcomes
// ABOUTME: Validates the page window before any request and retries only on HTTP 429
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Edamam Recipe Search Client
//!
//! Builds `GET {base_url}?q={text}+{diet}+{category}&app_id=..&app_key=..&from=..&to=..`,
//! sends it through a [`RecipeTransport`] with the 429 retry loop, and turns the
//! terminal response into a [`FetchOutcome`].
//!
//! # Example
//! ```rust,no_run
//! use recipe_finder::config::RecipeApiConfig;
//! use recipe_finder::external::{FetchOutcome, RecipeFetcher};
//! use recipe_finder::models::{Category, Diet, SearchQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = RecipeFetcher::from_config(RecipeApiConfig::from_env()?)?;
//! let query = SearchQuery::new("soup", Diet::Vegan, Category::Lunch);
//! if let FetchOutcome::Success(recipes) = fetcher.fetch(&query).await {
//!     println!("{} recipes", recipes.len());
//! }
//! # Ok(())
//! # }
//! ```

use recipe_core::constants::{edamam, search::QUERY_TERM_SEPARATOR};
use recipe_core::errors::{AppResult, FetchError};
use recipe_core::models::{FetchMode, Recipe, SearchQuery, SearchResponse};
use recipe_core::pagination::PageWindow;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use urlencoding::encode;

use super::retry::{send_with_retry, RetryPolicy};
use super::transport::{RecipeTransport, ReqwestTransport};
use crate::config::RecipeApiConfig;
use crate::store::Action;

/// Result of one fetch, as consumed by the state store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// Non-empty page of recipes, in response order
    Success(Vec<Recipe>),
    /// Well-formed response without hits
    Empty,
    /// Any failure, rendered as the message shown to the user
    Failure(String),
}

impl FetchOutcome {
    /// Store action for this outcome; `mode` only matters for `Success`
    #[must_use]
    pub fn into_action(self, mode: FetchMode) -> Action {
        Action::from_outcome(self, mode)
    }
}

impl From<Result<Vec<Recipe>, FetchError>> for FetchOutcome {
    fn from(result: Result<Vec<Recipe>, FetchError>) -> Self {
        match result {
            Ok(recipes) => Self::Success(recipes),
            Err(FetchError::NoResults) => Self::Empty,
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

/// Recipe search client
#[derive(Clone)]
pub struct RecipeFetcher {
    transport: Arc<dyn RecipeTransport>,
    config: RecipeApiConfig,
    policy: RetryPolicy,
}

impl RecipeFetcher {
    /// Create a fetcher over an arbitrary transport
    #[must_use]
    pub fn new(config: RecipeApiConfig, transport: Arc<dyn RecipeTransport>) -> Self {
        let policy = RetryPolicy::from(&config.retry);
        Self {
            transport,
            config,
            policy,
        }
    }

    /// Validate the configuration and create a fetcher backed by `reqwest`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built
    pub fn from_config(config: RecipeApiConfig) -> AppResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config.http)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Build the request URL for a query and page window.
    ///
    /// Each query term segment is percent-encoded; the segments are joined with
    /// a literal `+`.
    #[must_use]
    pub fn build_url(&self, query: &SearchQuery, window: PageWindow) -> String {
        self.build_url_with_key(query, window, &encode(&self.config.app_key))
    }

    /// Request URL with the application key masked, for logs
    #[must_use]
    pub fn redacted_url(&self, query: &SearchQuery, window: PageWindow) -> String {
        self.build_url_with_key(query, window, "***")
    }

    fn build_url_with_key(&self, query: &SearchQuery, window: PageWindow, key: &str) -> String {
        let base = &self.config.base_url;
        let separator = if base.contains('?') { '&' } else { '?' };
        let term = format!(
            "{text}{sep}{diet}{sep}{category}",
            text = encode(&query.text),
            sep = QUERY_TERM_SEPARATOR,
            diet = encode(query.diet.as_str()),
            category = encode(query.category.as_str()),
        );

        format!(
            "{base}{separator}q={term}&{id_param}={app_id}&{key_param}={key}&from={from}&to={to}",
            id_param = edamam::PARAM_APP_ID,
            app_id = encode(&self.config.app_id),
            key_param = edamam::PARAM_APP_KEY,
            from = window.from,
            to = window.to,
        )
    }

    /// Fetch one page of recipes.
    ///
    /// Issues a fresh request on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidPageParameters`] without any network call
    /// - [`FetchError::Network`] for transport failures
    /// - [`FetchError::RateLimitExhausted`] when every attempt was rate limited
    /// - [`FetchError::Http`] for any other non-2xx terminal response
    /// - [`FetchError::Decode`] when a 2xx body is not a hit list
    /// - [`FetchError::NoResults`] when the hit list is empty
    pub async fn fetch_recipes(&self, query: &SearchQuery) -> Result<Vec<Recipe>, FetchError> {
        let window = PageWindow::for_page(query.page)?;
        let url = self.build_url(query, window);
        info!(
            url = %self.redacted_url(query, window),
            page = query.page,
            "Fetching recipes"
        );

        let response = send_with_retry(self.transport.as_ref(), &url, self.policy).await?;

        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }

        let parsed: SearchResponse =
            serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()))?;
        let recipes = parsed.into_recipes();

        if recipes.is_empty() {
            return Err(FetchError::NoResults);
        }
        Ok(recipes)
    }

    /// Fetch one page and express the result as a [`FetchOutcome`]
    pub async fn fetch(&self, query: &SearchQuery) -> FetchOutcome {
        let result = self.fetch_recipes(query).await;
        match &result {
            Ok(recipes) => info!(count = recipes.len(), "Fetched recipes"),
            Err(FetchError::NoResults) => info!("Search returned no recipes"),
            Err(e) => error!("Error fetching recipes: {e}"),
        }
        FetchOutcome::from(result)
    }
}
