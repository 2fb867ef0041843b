// ABOUTME: Main library entry point for the recipe finder client
// ABOUTME: Rate-limit aware recipe fetcher, favorites state store, and search session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Finder
//!
//! Data-fetching and state core for a recipe search front end backed by the
//! Edamam recipe search API.
//!
//! ## Architecture
//!
//! - **External**: [`external::RecipeFetcher`] builds paged query URLs, retries
//!   HTTP 429 with a fixed delay, and resolves every call to a
//!   [`external::FetchOutcome`]
//! - **Store**: [`store::RecipeStore`] applies [`store::Action`]s through the
//!   pure [`store::reduce`] function
//! - **Session**: [`session::RecipeSession`] exposes `search`, `load_more`, and
//!   `toggle_favorite` to whatever renders the state
//! - **Config** / **Logging**: environment-driven setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_finder::config::RecipeApiConfig;
//! use recipe_finder::external::RecipeFetcher;
//! use recipe_finder::session::RecipeSession;
//! use recipe_finder::store::RecipeStore;
//! use recipe_finder::models::{Category, Diet};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = RecipeFetcher::from_config(RecipeApiConfig::from_env()?)?;
//! let session = RecipeSession::new(fetcher, RecipeStore::new());
//!
//! let state = session.search("pasta", Diet::Vegetarian, Category::Dinner).await;
//! println!("{} recipes, error: {:?}", state.recipes.len(), state.error);
//!
//! let state = session.load_more().await;
//! println!("{} recipes after load more", state.recipes.len());
//! # Ok(())
//! # }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Upstream recipe API client
pub mod external;

/// Structured logging setup
pub mod logging;

/// Inbound search, load-more, and favorite operations
pub mod session;

/// Application state, actions, and reducer
pub mod store;

pub use recipe_core::{constants, errors, models, pagination};
