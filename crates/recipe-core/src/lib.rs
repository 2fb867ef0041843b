// ABOUTME: Core types and constants for the recipe finder client
// ABOUTME: Foundation crate with error handling, recipe models, page windows, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe finder.
//! Nothing in here performs I/O, which keeps it cheap to depend on from both the
//! fetcher and the state store.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the fetch-specific `FetchError`
//! - **constants**: API defaults, retry defaults, and user-facing messages
//! - **models**: `Recipe`, `SearchQuery`, diet and category filters
//! - **pagination**: Fixed-size page windows for the upstream `from`/`to` parameters

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe and search query models
pub mod models;

/// Page window arithmetic for the upstream API
pub mod pagination;
