// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for recipe-cli
// ABOUTME: Provides access to the search and page window commands

pub mod search;
pub mod window;
