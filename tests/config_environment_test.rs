// ABOUTME: Integration tests for environment-driven client configuration
// ABOUTME: Verifies defaults, overrides, required credentials, and invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(missing_docs)]

use recipe_finder::config::{HttpClientConfig, RecipeApiConfig, RetryConfig};
use recipe_finder::errors::ErrorCode;
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 7] = [
    "EDAMAM_APP_ID",
    "EDAMAM_APP_KEY",
    "EDAMAM_BASE_URL",
    "RECIPE_RETRY_MAX_ATTEMPTS",
    "RECIPE_RETRY_DELAY_MS",
    "RECIPE_HTTP_TIMEOUT_SECS",
    "RECIPE_HTTP_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

fn set_credentials() {
    env::set_var("EDAMAM_APP_ID", "my-id");
    env::set_var("EDAMAM_APP_KEY", "my-key");
}

#[test]
#[serial]
fn test_defaults_with_credentials() {
    clear_env();
    set_credentials();

    let config = RecipeApiConfig::from_env().unwrap();

    assert_eq!(config.base_url, "https://api.edamam.com/search");
    assert_eq!(config.app_id, "my-id");
    assert_eq!(config.app_key, "my-key");
    assert_eq!(config.retry, RetryConfig::default());
    assert_eq!(config.retry.max_attempts, 50);
    assert_eq!(config.retry.delay_ms, 2000);
    assert_eq!(config.http, HttpClientConfig::default());
    assert_eq!(config.http.timeout_secs, None);
    assert_eq!(config.http.connect_timeout_secs, None);
    clear_env();
}

#[test]
#[serial]
fn test_blank_timeout_means_none() {
    clear_env();
    set_credentials();
    env::set_var("RECIPE_HTTP_CONNECT_TIMEOUT_SECS", "  ");

    let config = RecipeApiConfig::from_env().unwrap();

    assert_eq!(config.http.connect_timeout_secs, None);
    clear_env();
}

#[test]
#[serial]
fn test_overrides() {
    clear_env();
    set_credentials();
    env::set_var("EDAMAM_BASE_URL", "http://localhost:8080/search");
    env::set_var("RECIPE_RETRY_MAX_ATTEMPTS", "5");
    env::set_var("RECIPE_RETRY_DELAY_MS", "100");
    env::set_var("RECIPE_HTTP_TIMEOUT_SECS", "3");

    let config = RecipeApiConfig::from_env().unwrap();

    assert_eq!(config.base_url, "http://localhost:8080/search");
    assert_eq!(config.retry.max_attempts, 5);
    assert_eq!(config.retry.delay_ms, 100);
    assert_eq!(config.http.timeout_secs, Some(3));
    assert_eq!(config.http.connect_timeout_secs, None);
    clear_env();
}

#[test]
#[serial]
fn test_missing_credentials() {
    clear_env();
    let err = RecipeApiConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains("EDAMAM_APP_ID"));

    env::set_var("EDAMAM_APP_ID", "my-id");
    env::set_var("EDAMAM_APP_KEY", "   ");
    let err = RecipeApiConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains("EDAMAM_APP_KEY"));
    clear_env();
}

#[test]
#[serial]
fn test_invalid_values() {
    clear_env();
    set_credentials();

    env::set_var("RECIPE_RETRY_MAX_ATTEMPTS", "lots");
    assert_eq!(
        RecipeApiConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    env::set_var("RECIPE_RETRY_MAX_ATTEMPTS", "0");
    assert_eq!(
        RecipeApiConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    env::remove_var("RECIPE_RETRY_MAX_ATTEMPTS");
    env::set_var("RECIPE_HTTP_TIMEOUT_SECS", "soon");
    assert_eq!(
        RecipeApiConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    env::remove_var("RECIPE_HTTP_TIMEOUT_SECS");
    env::set_var("EDAMAM_BASE_URL", "not a url");
    assert_eq!(
        RecipeApiConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    clear_env();
}

#[test]
fn test_debug_redacts_key() {
    let config = RecipeApiConfig::new("my-id", "super-secret");
    let rendered = format!("{config:?}");
    assert!(rendered.contains("my-id"));
    assert!(!rendered.contains("super-secret"));
}
