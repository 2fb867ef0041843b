// ABOUTME: Application state store for recipe search results, favorites, and request status
// ABOUTME: Explicit actions applied by a pure reducer behind a single-writer async store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! State store
//!
//! [`AppState`] is only ever changed by [`reduce`], and only [`RecipeStore::dispatch`]
//! calls it, so each action is applied atomically.

/// Actions accepted by the reducer
pub mod actions;
/// Pure state transition function
pub mod reducer;
/// Application state snapshot
pub mod state;

mod recipe_store;

pub use actions::Action;
pub use recipe_store::RecipeStore;
pub use reducer::reduce;
pub use state::AppState;
