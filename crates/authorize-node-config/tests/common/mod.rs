// crates/authorize-node-config/tests/common/mod.rs
// ============================================================================
// Module: Config Test Helpers
// Description: Shared parsing helpers for configuration test suites.
// ============================================================================
//! ## Overview
//! Parses configuration documents from TOML literals without running
//! validation, so suites can assert on validation errors directly.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use authorize_node_config::AuthorizeNodeConfig;

/// Parses a config from a TOML literal without validating it.
pub fn config_from_toml(toml_str: &str) -> Result<AuthorizeNodeConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal valid static-strategy config document.
pub fn static_toml() -> &'static str {
    r#"
[source]
strategy = "static"
endpoint_url = "https://pdp.example.com"
access_token_attribute = "pdpToken"
"#
}

/// Returns a minimal valid worker-strategy config document.
pub fn worker_toml() -> &'static str {
    r#"
[source]
strategy = "worker"
worker_name = "orders-worker"
decision_endpoint_id = "dep-1"
"#
}

/// Returns a minimal valid environment-strategy config document.
pub fn environment_toml() -> &'static str {
    r#"
[source]
strategy = "environment"
name = "shared-eu"
region = "europe"
environment_id = "env-5678"
decision_endpoint_id = "dep-2"
"#
}
