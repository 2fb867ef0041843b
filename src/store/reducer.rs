// ABOUTME: Pure reducer applying one action to the application state
// ABOUTME: Encodes the full transition table for fetch lifecycle and favorite toggling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::messages::NO_RECIPES_FOUND;
use recipe_core::models::FetchMode;

use super::actions::Action;
use super::state::AppState;

/// Apply `action` to `state` and return the next state.
///
/// | Action | Effect |
/// |---|---|
/// | `RequestStarted` | `loading = true`, `error = None` |
/// | `FetchSucceeded` / `Replace` | `recipes = list`, `loading = false`, `error = None` |
/// | `FetchSucceeded` / `Append` | `recipes ++= list`, `loading = false`, error untouched |
/// | `FetchEmpty` | `error = "No recipes found"`, `loading = false` |
/// | `FetchFailed(msg)` | `error = msg`, `loading = false` |
/// | `ToggleFavorite(r)` | remove favorites labelled `r.label`, or append `r` |
#[must_use]
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::RequestStarted => {
            state.loading = true;
            state.error = None;
        }
        Action::FetchSucceeded {
            recipes,
            mode: FetchMode::Replace,
        } => {
            state.recipes = recipes;
            state.loading = false;
            state.error = None;
        }
        Action::FetchSucceeded {
            recipes,
            mode: FetchMode::Append,
        } => {
            state.recipes.extend(recipes);
            state.loading = false;
        }
        Action::FetchEmpty => {
            state.error = Some(NO_RECIPES_FOUND.to_owned());
            state.loading = false;
        }
        Action::FetchFailed(message) => {
            state.error = Some(message);
            state.loading = false;
        }
        Action::ToggleFavorite(recipe) => {
            if state.is_favorite(&recipe.label) {
                state.favorites.retain(|fav| !fav.same_label(&recipe));
            } else {
                state.favorites.push(recipe);
            }
        }
    }
    state
}
