// ABOUTME: Constants module with domain-separated organization
// ABOUTME: API defaults, retry policy defaults, environment variable names, and messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Service identity used for structured logging
pub mod service_names {
    /// Name of the recipe finder service
    pub const RECIPE_FINDER: &str = "recipe-finder";
}

/// Upstream Edamam recipe search API
pub mod edamam {
    /// Default recipe search endpoint
    pub const DEFAULT_BASE_URL: &str = "https://api.edamam.com/search";
    /// Service label used in error messages and logs
    pub const SERVICE_NAME: &str = "Edamam API";
    /// Query parameter carrying the application id
    pub const PARAM_APP_ID: &str = "app_id";
    /// Query parameter carrying the application key
    pub const PARAM_APP_KEY: &str = "app_key";
}

/// Pagination constants
pub mod paging {
    /// Number of recipes requested per page
    pub const PAGE_SIZE: u64 = 20;
}

/// Retry policy defaults for rate-limited responses
pub mod retry {
    /// Maximum number of requests issued for one fetch
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;
    /// Fixed delay between attempts after a 429 response
    pub const DEFAULT_DELAY_MS: u64 = 2000;
    /// HTTP status that triggers a retry
    pub const RATE_LIMITED_STATUS: u16 = 429;
}

/// Search defaults applied when a session starts
pub mod search {
    /// Search text used for the initial query
    pub const DEFAULT_SEARCH_TEXT: &str = "vegetarian";
    /// Separator joining text, diet, and category into one query term
    pub const QUERY_TERM_SEPARATOR: char = '+';
}

/// Messages surfaced to the user through the `error` state field
pub mod messages {
    /// Page parameters could not produce a valid window
    pub const INVALID_PAGE_WINDOW: &str = "'from' or 'to' is invalid";
    /// Every attempt in the retry budget was rate limited
    pub const RETRIES_EXHAUSTED: &str = "Failed to fetch after multiple retries";
    /// Well-formed response with no hits
    pub const NO_RECIPES_FOUND: &str = "No recipes found";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Edamam application id
    pub const APP_ID: &str = "EDAMAM_APP_ID";
    /// Edamam application key
    pub const APP_KEY: &str = "EDAMAM_APP_KEY";
    /// Override for the recipe search endpoint
    pub const BASE_URL: &str = "EDAMAM_BASE_URL";
    /// Maximum attempts per fetch
    pub const RETRY_MAX_ATTEMPTS: &str = "RECIPE_RETRY_MAX_ATTEMPTS";
    /// Delay between rate-limited attempts, in milliseconds
    pub const RETRY_DELAY_MS: &str = "RECIPE_RETRY_DELAY_MS";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "RECIPE_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "RECIPE_HTTP_CONNECT_TIMEOUT_SECS";
}
