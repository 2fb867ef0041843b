// ABOUTME: Action definitions driving every application state transition
// ABOUTME: Fetch outcomes are converted into actions together with their merge mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::{FetchMode, Recipe};
use serde::{Deserialize, Serialize};

use crate::external::FetchOutcome;

/// An event the store can apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    /// A fetch has been issued
    RequestStarted,
    /// A fetch returned recipes
    FetchSucceeded {
        /// Recipes in response order
        recipes: Vec<Recipe>,
        /// Whether to replace or extend the current list
        mode: FetchMode,
    },
    /// A fetch returned a well-formed but empty result
    FetchEmpty,
    /// A fetch failed with the given message
    FetchFailed(String),
    /// Add the recipe to favorites, or remove the favorite sharing its label
    ToggleFavorite(Recipe),
}

impl Action {
    /// Turn a fetch outcome into the action that records it
    #[must_use]
    pub fn from_outcome(outcome: FetchOutcome, mode: FetchMode) -> Self {
        match outcome {
            FetchOutcome::Success(recipes) => Self::FetchSucceeded { recipes, mode },
            FetchOutcome::Empty => Self::FetchEmpty,
            FetchOutcome::Failure(message) => Self::FetchFailed(message),
        }
    }

    /// Short name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RequestStarted => "request_started",
            Self::FetchSucceeded { .. } => "fetch_succeeded",
            Self::FetchEmpty => "fetch_empty",
            Self::FetchFailed(_) => "fetch_failed",
            Self::ToggleFavorite(_) => "toggle_favorite",
        }
    }
}
