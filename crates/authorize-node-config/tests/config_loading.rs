//! Config loading tests for authorize-node-config.
// crates/authorize-node-config/tests/config_loading.rs
// =============================================================================
// Module: Config Loading Tests
// Description: Tests for file-based configuration loading limits.
// Purpose: Ensure file reads enforce size, encoding, and existence rules.
// =============================================================================

use std::fs;

use authorize_node_config::AuthorizeNodeConfig;
use authorize_node_config::ConfigError;

mod common;

type TestResult = Result<(), String>;

#[test]
fn load_reads_explicit_path() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("authorize-node.toml");
    fs::write(&path, common::static_toml()).map_err(|err| err.to_string())?;

    let config = AuthorizeNodeConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn load_missing_file_is_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("missing.toml");
    match AuthorizeNodeConfig::load(Some(&path)) {
        Err(ConfigError::Io(_)) => Ok(()),
        Err(other) => Err(format!("expected io error, got: {other}")),
        Ok(_) => Err("expected load to fail".to_string()),
    }
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("big.toml");
    let mut content = common::static_toml().to_string();
    content.push_str(&format!("\n# {}\n", "x".repeat(64 * 1024)));
    fs::write(&path, content).map_err(|err| err.to_string())?;

    match AuthorizeNodeConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(message)) if message.contains("size limit") => Ok(()),
        Err(other) => Err(format!("unexpected error: {other}")),
        Ok(_) => Err("expected load to fail".to_string()),
    }
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("binary.toml");
    fs::write(&path, [0xFF, 0xFE, 0x00, 0x9F]).map_err(|err| err.to_string())?;

    match AuthorizeNodeConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(message)) if message.contains("utf-8") => Ok(()),
        Err(other) => Err(format!("unexpected error: {other}")),
        Ok(_) => Err("expected load to fail".to_string()),
    }
}

#[test]
fn load_rejects_invalid_toml() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "source = [unclosed").map_err(|err| err.to_string())?;

    match AuthorizeNodeConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("expected parse error, got: {other}")),
        Ok(_) => Err("expected load to fail".to_string()),
    }
}

#[test]
fn load_validates_after_parsing() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("cleartext.toml");
    let toml_str = r#"
[source]
strategy = "static"
endpoint_url = "http://pdp.example.com"
access_token_attribute = "pdpToken"
"#;
    fs::write(&path, toml_str).map_err(|err| err.to_string())?;

    match AuthorizeNodeConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(message)) if message.contains("must use https") => Ok(()),
        Err(other) => Err(format!("unexpected error: {other}")),
        Ok(_) => Err("expected load to fail".to_string()),
    }
}
