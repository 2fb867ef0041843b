// ABOUTME: External API client modules for the Edamam recipe search API
// ABOUTME: Transport abstraction, rate-limit retry loop, and the recipe fetcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! The fetcher never touches application state: every call resolves to a
//! [`FetchOutcome`] that the store turns into a transition.

/// Recipe search client built on a pluggable transport
pub mod edamam_client;
/// Fixed-delay retry loop for rate-limited responses
pub mod retry;
/// HTTP transport abstraction and the reqwest implementation
pub mod transport;

pub use edamam_client::{FetchOutcome, RecipeFetcher};
pub use retry::{send_with_retry, RetryPolicy};
pub use transport::{RecipeTransport, ReqwestTransport, TransportResponse};
