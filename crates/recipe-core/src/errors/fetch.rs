// ABOUTME: Fetch-specific error kinds for the recipe search fetcher
// ABOUTME: Each kind renders the exact message shown to the user through the state store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};
use crate::constants::edamam;

/// Errors produced while fetching one page of recipes.
///
/// All of these are recovered at the fetcher boundary: the state store only
/// receives the rendered message, so the `Display` text is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Page index could not be turned into a `from`/`to` window; no request was sent
    #[error("'from' or 'to' is invalid")]
    InvalidPageParameters,

    /// Every attempt in the retry budget came back 429
    #[error("Failed to fetch after multiple retries")]
    RateLimitExhausted {
        /// Number of requests issued before giving up
        attempts: u32,
    },

    /// Terminal non-success response
    #[error("API Error: {status_text} ({status}) - {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
        /// Response body text
        body: String,
    },

    /// Well-formed response containing zero hits
    #[error("No recipes found")]
    NoResults,

    /// Transport-level failure (DNS, connect, timeout)
    #[error("{0}")]
    Network(String),

    /// Success response whose body is not the expected shape
    #[error("Failed to parse recipe response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Map this failure onto the application error code space
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPageParameters => ErrorCode::ValueOutOfRange,
            Self::RateLimitExhausted { .. } => ErrorCode::ExternalRateLimited,
            Self::Http { .. } => ErrorCode::ExternalServiceError,
            Self::NoResults => ErrorCode::ResourceNotFound,
            Self::Network(_) => ErrorCode::ExternalServiceUnavailable,
            Self::Decode(_) => ErrorCode::SerializationError,
        }
    }
}

impl From<FetchError> for AppError {
    fn from(error: FetchError) -> Self {
        let code = error.code();
        match &error {
            FetchError::Http { .. } | FetchError::Network(_) | FetchError::Decode(_) => {
                Self::new(code, format!("{}: {error}", edamam::SERVICE_NAME))
            }
            FetchError::InvalidPageParameters
            | FetchError::RateLimitExhausted { .. }
            | FetchError::NoResults => Self::new(code, error.to_string()),
        }
    }
}
