// ABOUTME: Search query model with diet and category filters and a zero-based page index
// ABOUTME: Builds the combined text+diet+category query term sent upstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::search::{DEFAULT_SEARCH_TEXT, QUERY_TERM_SEPARATOR};
use crate::errors::AppError;

/// Diet filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    /// No diet restriction
    #[default]
    All,
    /// Vegetarian
    Vegetarian,
    /// Gluten free
    GlutenFree,
    /// Vegan
    Vegan,
    /// Ketogenic
    Keto,
}

impl Diet {
    /// Every diet filter, in menu order
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Vegetarian,
        Self::GlutenFree,
        Self::Vegan,
        Self::Keto,
    ];

    /// Wire representation used in the query term
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Vegetarian => "vegetarian",
            Self::GlutenFree => "gluten-free",
            Self::Vegan => "vegan",
            Self::Keto => "keto",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|diet| diet.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "unknown diet '{s}' (expected one of: all, vegetarian, gluten-free, vegan, keto)"
                ))
            })
    }
}

/// Meal category filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Any meal
    #[default]
    All,
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
}

impl Category {
    /// Every category filter, in menu order
    pub const ALL: [Self; 4] = [Self::All, Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Wire representation used in the query term
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "unknown category '{s}' (expected one of: all, breakfast, lunch, dinner)"
                ))
            })
    }
}

/// How a successful fetch is merged into the recipe list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMode {
    /// Fresh search: the result list replaces the current recipes
    Replace,
    /// "Load more": the result list is appended to the current recipes
    Append,
}

/// Parameters of one fetch.
///
/// `page` is signed so that a negative index can reach the fetcher's page
/// precondition instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free search text
    pub text: String,
    /// Diet filter
    pub diet: Diet,
    /// Category filter
    pub category: Category,
    /// Zero-based page index
    pub page: i64,
}

impl SearchQuery {
    /// Create a query for the first page
    #[must_use]
    pub fn new(text: impl Into<String>, diet: Diet, category: Category) -> Self {
        Self {
            text: text.into(),
            diet,
            category,
            page: 0,
        }
    }

    /// Same query at a specific page
    #[must_use]
    pub fn at_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Same query one page further along
    #[must_use]
    pub fn next_page(&self) -> Self {
        self.clone().at_page(self.page.saturating_add(1))
    }

    /// Combined `text+diet+category` term, unencoded
    #[must_use]
    pub fn query_term(&self) -> String {
        format!(
            "{text}{sep}{diet}{sep}{category}",
            text = self.text,
            sep = QUERY_TERM_SEPARATOR,
            diet = self.diet,
            category = self.category,
        )
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_TEXT, Diet::All, Category::All)
    }
}
