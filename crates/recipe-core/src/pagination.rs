// ABOUTME: Fixed-size page windows translating a zero-based page index into from/to offsets
// ABOUTME: Rejects negative, overflowing, or non-numeric pages before any request is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Page window arithmetic
//!
//! The upstream API pages with a half-open `[from, to)` index range rather than
//! page numbers, so every fetch converts its page index here first.

use serde::{Deserialize, Serialize};

use crate::constants::paging::PAGE_SIZE;
use crate::errors::FetchError;

/// The `[from, to)` range requested from the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// First result index (inclusive)
    pub from: u64,
    /// Last result index (exclusive)
    pub to: u64,
}

impl PageWindow {
    /// Compute the window for a zero-based page index.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidPageParameters`] if `page` is negative or the
    /// offsets would overflow.
    pub fn for_page(page: i64) -> Result<Self, FetchError> {
        let page = u64::try_from(page).map_err(|_| FetchError::InvalidPageParameters)?;
        let from = page
            .checked_mul(PAGE_SIZE)
            .ok_or(FetchError::InvalidPageParameters)?;
        let to = from
            .checked_add(PAGE_SIZE)
            .ok_or(FetchError::InvalidPageParameters)?;
        Ok(Self { from, to })
    }

    /// Compute the window for a page index supplied as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidPageParameters`] if `raw` is not an integer
    /// or names an invalid page.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let page = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| FetchError::InvalidPageParameters)?;
        Self::for_page(page)
    }

    /// Number of results covered by this window
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.to - self.from
    }

    /// Whether the window covers no results
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.to == self.from
    }
}
