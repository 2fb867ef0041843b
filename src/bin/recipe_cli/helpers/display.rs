// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Prints result lists, favorites, recipe details, and JSON state dumps

use anyhow::Result;
use recipe_finder::models::{Recipe, SearchQuery};
use recipe_finder::store::AppState;
use serde_json::json;

/// Print the result list and favorites for a finished search
pub fn print_state(query: &SearchQuery, state: &AppState) {
    println!("\nSearch: {} (page {})", query.query_term(), query.page);
    println!("{}", "=".repeat(60));

    if let Some(error) = &state.error {
        println!("Error: {error}");
    } else if state.recipes.is_empty() {
        println!("No recipes found");
    }

    for (index, recipe) in state.recipes.iter().enumerate() {
        let marker = if state.is_favorite(&recipe.label) {
            "*"
        } else {
            " "
        };
        println!("{marker} {:>3}. {}", index + 1, recipe.label);
    }

    if !state.favorites.is_empty() {
        println!("\nFavorites ({}):", state.favorites.len());
        for recipe in &state.favorites {
            println!("   - {}", recipe.label);
        }
    }
}

/// Print the detail view for one recipe
pub fn print_recipe_details(recipe: &Recipe, is_favorite: bool) {
    println!("\n{}", recipe.label);
    println!("{}", "-".repeat(60));
    if !recipe.category.is_empty() {
        println!("Category: {}", recipe.category);
    }
    if !recipe.image.is_empty() {
        println!("Image: {}", recipe.image);
    }
    println!("Favorite: {}", if is_favorite { "yes" } else { "no" });

    if recipe.ingredient_lines.is_empty() {
        println!("No ingredients listed");
    } else {
        println!("Ingredients:");
        for line in &recipe.ingredient_lines {
            println!("   - {line}");
        }
    }
}

/// Print the state and selected recipe as pretty JSON
pub fn print_state_json(state: &AppState, selected: Option<&Recipe>) -> Result<()> {
    let output = json!({
        "state": state,
        "selected": selected,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Report a label that matched no recipe
pub fn print_missing_label(label: &str) {
    eprintln!("Recipe '{label}' not found in current results");
}
