// ABOUTME: Application state holding recipes, favorites, the loading flag, and the last error
// ABOUTME: Favorites are kept in insertion order and are unique by recipe label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::Recipe;
use serde::{Deserialize, Serialize};

/// Snapshot of the application state.
///
/// `loading` is true only between a request starting and its outcome being applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Current result list; replaced by a fresh search, extended by "load more"
    pub recipes: Vec<Recipe>,
    /// Favorited recipes, no two sharing a label
    pub favorites: Vec<Recipe>,
    /// A fetch is in flight
    pub loading: bool,
    /// Message from the last failed or empty fetch
    pub error: Option<String>,
}

impl AppState {
    /// Whether a recipe with this label is a favorite
    #[must_use]
    pub fn is_favorite(&self, label: &str) -> bool {
        self.favorites.iter().any(|fav| fav.label == label)
    }

    /// Look up a recipe in the current result list by label
    #[must_use]
    pub fn find_recipe(&self, label: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.label == label)
    }
}
