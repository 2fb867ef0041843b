// ABOUTME: Recipe search session exposing the inbound search, load-more, and favorite operations
// ABOUTME: Tracks the current query and page, drives the fetcher, and feeds outcomes to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe search session
//!
//! Each inbound operation produces exactly one fetch or one favorite toggle.
//! Fetches are not deduplicated: two overlapping calls both run, and the
//! outcome dispatched last is the one left in the store.

use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::{Category, Diet, FetchMode, Recipe, SearchQuery};
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::external::RecipeFetcher;
use crate::store::{Action, AppState, RecipeStore};

/// Front door for a presentation layer
pub struct RecipeSession {
    fetcher: RecipeFetcher,
    store: RecipeStore,
    query: Mutex<SearchQuery>,
    selected: RwLock<Option<Recipe>>,
}

impl RecipeSession {
    /// Create a session starting from the default query (`vegetarian`, all, all, page 0)
    #[must_use]
    pub fn new(fetcher: RecipeFetcher, store: RecipeStore) -> Self {
        Self {
            fetcher,
            store,
            query: Mutex::new(SearchQuery::default()),
            selected: RwLock::new(None),
        }
    }

    /// Store backing this session
    #[must_use]
    pub const fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// Read-only copy of the current state
    pub async fn snapshot(&self) -> AppState {
        self.store.snapshot().await
    }

    /// Parameters of the most recent intent
    pub async fn current_query(&self) -> SearchQuery {
        self.query.lock().await.clone()
    }

    /// Fresh search: resets to page 0 and replaces the recipe list
    pub async fn search(&self, text: &str, diet: Diet, category: Category) -> AppState {
        let query = SearchQuery::new(text, diet, category);
        *self.query.lock().await = query.clone();
        info!(query = %query.query_term(), "Starting new search");
        self.run(&query, FetchMode::Replace).await
    }

    /// Re-run the current parameters from page 0
    pub async fn refresh(&self) -> AppState {
        let query = {
            let mut current = self.query.lock().await;
            *current = current.clone().at_page(0);
            current.clone()
        };
        self.run(&query, FetchMode::Replace).await
    }

    /// Fetch the next page of the current search and append it
    pub async fn load_more(&self) -> AppState {
        let query = {
            let mut current = self.query.lock().await;
            *current = current.next_page();
            current.clone()
        };
        info!(page = query.page, "Loading more recipes");
        self.run(&query, FetchMode::Append).await
    }

    /// Add the recipe to favorites, or remove the favorite with its label
    pub async fn toggle_favorite(&self, recipe: Recipe) -> AppState {
        self.store.dispatch(Action::ToggleFavorite(recipe)).await
    }

    /// Open the detail view for a recipe
    pub async fn select_recipe(&self, recipe: Recipe) {
        *self.selected.write().await = Some(recipe);
    }

    /// Open the detail view for a recipe in the current results or favorites
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has this label
    pub async fn select_by_label(&self, label: &str) -> AppResult<Recipe> {
        let state = self.store.snapshot().await;
        let recipe = state
            .find_recipe(label)
            .or_else(|| state.favorites.iter().find(|fav| fav.label == label))
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Recipe '{label}'")))?;
        self.select_recipe(recipe.clone()).await;
        Ok(recipe)
    }

    /// Close the detail view
    pub async fn close_details(&self) {
        *self.selected.write().await = None;
    }

    /// Recipe currently shown in the detail view
    pub async fn selected_recipe(&self) -> Option<Recipe> {
        self.selected.read().await.clone()
    }

    async fn run(&self, query: &SearchQuery, mode: FetchMode) -> AppState {
        self.store.dispatch(Action::RequestStarted).await;
        let outcome = self.fetcher.fetch(query).await;
        self.store.dispatch(outcome.into_action(mode)).await
    }
}
