// ABOUTME: Recipe model and the upstream search response envelope
// ABOUTME: Recipes are opaque values keyed by label; only presence of the label is checked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A recipe as returned by the upstream API.
///
/// `label` acts as the identity key for favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name, also the favorite identity key
    pub label: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Category as reported upstream
    #[serde(default)]
    pub category: String,
    /// Ingredient lines in recipe order
    #[serde(rename = "ingredientLines", default)]
    pub ingredient_lines: Vec<String>,
}

impl Recipe {
    /// Create a recipe with only a label, the rest left empty
    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image: String::new(),
            category: String::new(),
            ingredient_lines: Vec::new(),
        }
    }

    /// Whether this recipe shares its identity key with `other`
    #[must_use]
    pub fn same_label(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

/// One result record wrapping a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    /// The nested recipe
    pub recipe: Recipe,
}

/// Body of a successful search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Result records for the requested page window
    pub hits: Vec<Hit>,
}

impl SearchResponse {
    /// Extract the recipe from each hit, preserving order
    #[must_use]
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.hits.into_iter().map(|hit| hit.recipe).collect()
    }
}
