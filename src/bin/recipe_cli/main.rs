// ABOUTME: Recipe CLI - command-line front end for the recipe search session
// ABOUTME: Runs searches with pagination, marks favorites, and shows recipe details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Search with filters (credentials from EDAMAM_APP_ID / EDAMAM_APP_KEY)
//! recipe-cli search chicken --diet keto --category dinner
//!
//! # Fetch three pages (one search plus two "load more")
//! recipe-cli search soup --pages 3
//!
//! # Mark favorites and open the detail view for one recipe
//! recipe-cli search pasta --favorite "Pasta Primavera" --details "Pasta Primavera"
//!
//! # Show the from/to window for a page index
//! recipe-cli window 4
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_finder::logging::LoggingConfig;
use recipe_finder::models::{Category, Diet};

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe search from the command line",
    long_about = "Searches the Edamam recipe API with diet and category filters, pages through results, and tracks favorites for the session."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search recipes
    Search {
        /// Search text (defaults to "vegetarian")
        text: Option<String>,

        /// Diet filter: all, vegetarian, gluten-free, vegan, keto
        #[arg(long, default_value = "all")]
        diet: Diet,

        /// Category filter: all, breakfast, lunch, dinner
        #[arg(long, default_value = "all")]
        category: Category,

        /// Number of pages to fetch (the first search plus "load more" calls)
        #[arg(long, default_value = "1")]
        pages: u32,

        /// Toggle a recipe label as favorite (repeatable)
        #[arg(long = "favorite", value_name = "LABEL")]
        favorites: Vec<String>,

        /// Show the detail view for a recipe label
        #[arg(long, value_name = "LABEL")]
        details: Option<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the from/to window requested for a page index
    Window {
        /// Zero-based page index
        page: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.with_level("debug").init()?;
    } else {
        logging.init()?;
    }

    match cli.command {
        Command::Search {
            text,
            diet,
            category,
            pages,
            favorites,
            details,
            json,
        } => {
            commands::search::run(commands::search::SearchArgs {
                text,
                diet,
                category,
                pages,
                favorites,
                details,
                json,
            })
            .await?;
        }
        Command::Window { page } => commands::window::run(&page)?,
    }

    Ok(())
}
