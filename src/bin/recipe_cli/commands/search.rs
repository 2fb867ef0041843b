// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Search command for recipe-cli
// ABOUTME: Runs one search, optional load-more pages, favorite toggles, and a detail view

use anyhow::Result;
use recipe_finder::config::RecipeApiConfig;
use recipe_finder::constants::search::DEFAULT_SEARCH_TEXT;
use recipe_finder::external::RecipeFetcher;
use recipe_finder::models::{Category, Diet};
use recipe_finder::session::RecipeSession;
use recipe_finder::store::RecipeStore;
use tracing::{info, warn};

use crate::helpers::display;

/// Parsed arguments of the `search` subcommand
pub struct SearchArgs {
    pub text: Option<String>,
    pub diet: Diet,
    pub category: Category,
    pub pages: u32,
    pub favorites: Vec<String>,
    pub details: Option<String>,
    pub json: bool,
}

/// Run the search flow against the configured API
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = RecipeApiConfig::from_env()?;
    let fetcher = RecipeFetcher::from_config(config)?;
    let session = RecipeSession::new(fetcher, RecipeStore::new());

    let text = args.text.as_deref().unwrap_or(DEFAULT_SEARCH_TEXT);
    let mut state = session.search(text, args.diet, args.category).await;

    for _ in 1..args.pages {
        if state.error.is_some() {
            info!("Stopping pagination after error");
            break;
        }
        state = session.load_more().await;
    }

    for label in &args.favorites {
        let Some(recipe) = state.find_recipe(label).cloned() else {
            warn!(label = %label, "Favorite label not in current results");
            display::print_missing_label(label);
            continue;
        };
        state = session.toggle_favorite(recipe).await;
    }

    let selected = match args.details.as_deref() {
        Some(label) => match session.select_by_label(label).await {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                display::print_missing_label(label);
                warn!("{e}");
                None
            }
        },
        None => None,
    };

    if args.json {
        display::print_state_json(&state, selected.as_ref())?;
    } else {
        let query = session.current_query().await;
        display::print_state(&query, &state);
        if let Some(recipe) = &selected {
            display::print_recipe_details(recipe, state.is_favorite(&recipe.label));
        }
    }

    Ok(())
}
