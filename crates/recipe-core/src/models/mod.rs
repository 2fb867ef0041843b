// ABOUTME: Core data models for recipe search
// ABOUTME: Recipe payloads from the upstream API and the search query sent to it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe search models

mod query;
mod recipe;

pub use query::{Category, Diet, FetchMode, SearchQuery};
pub use recipe::{Hit, Recipe, SearchResponse};
