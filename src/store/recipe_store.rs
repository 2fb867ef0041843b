// ABOUTME: Shared async store wrapping the application state behind a write lock
// ABOUTME: Dispatch applies one reducer transition atomically and returns the new snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::mem;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::actions::Action;
use super::reducer::reduce;
use super::state::AppState;

/// Cloneable handle to the application state.
///
/// Clones share the same state. Concurrent dispatches are serialized by the
/// lock; when two fetches race, whichever outcome is dispatched last wins.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    state: Arc<RwLock<AppState>>,
}

impl RecipeStore {
    /// Create a store with empty recipes and favorites, not loading, no error
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the resulting snapshot
    pub async fn dispatch(&self, action: Action) -> AppState {
        let name = action.name();
        let mut guard = self.state.write().await;
        let current = mem::take(&mut *guard);
        *guard = reduce(current, action);
        debug!(
            action = name,
            recipes = guard.recipes.len(),
            favorites = guard.favorites.len(),
            loading = guard.loading,
            "Applied action"
        );
        guard.clone()
    }

    /// Read-only copy of the current state
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Whether a recipe with this label is currently a favorite
    pub async fn is_favorite(&self, label: &str) -> bool {
        self.state.read().await.is_favorite(label)
    }
}
