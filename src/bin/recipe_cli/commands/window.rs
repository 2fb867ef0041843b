// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Page window command for recipe-cli
// ABOUTME: Prints the from/to bounds requested for a page index without any network call

use anyhow::Result;
use recipe_finder::pagination::PageWindow;

/// Print the window for `page`, or fail with the invalid-parameter message
pub fn run(page: &str) -> Result<()> {
    let window = PageWindow::parse(page)?;
    println!("page {}: from={} to={}", page.trim(), window.from, window.to);
    Ok(())
}
