// crates/authorize-node-config/src/config.rs
// ============================================================================
// Module: Authorize Node Configuration
// Description: Configuration loading and validation for authorize nodes.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: authorize-node-core, serde, toml, url
// ============================================================================

//! ## Overview
//! Node configuration is loaded from a TOML file with strict size and field
//! limits. Missing or invalid configuration fails closed: nothing is
//! defaulted into a callable endpoint, statement codes may not shadow the
//! fixed outcome set, and cleartext endpoints require an explicit opt-in.
//! Validated configuration converts into the core runtime types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use authorize_node_core::CredentialSource;
use authorize_node_core::DecisionEndpointId;
use authorize_node_core::EnvironmentId;
use authorize_node_core::EnvironmentSettings;
use authorize_node_core::NodeConfig;
use authorize_node_core::Outcome;
use authorize_node_core::Region;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "authorize-node.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "AUTHORIZE_NODE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum total path length for the config file location.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of mapped attributes.
pub(crate) const MAX_ATTRIBUTES: usize = 64;
/// Maximum length of a mapped attribute name.
pub(crate) const MAX_ATTRIBUTE_NAME_LENGTH: usize = 256;
/// Maximum number of configured statement codes.
pub(crate) const MAX_STATEMENT_CODES: usize = 32;
/// Maximum length of a configured statement code.
pub(crate) const MAX_STATEMENT_CODE_LENGTH: usize = 128;
/// Maximum length of the configured endpoint URL.
pub(crate) const MAX_URL_LENGTH: usize = 2048;
/// Maximum length of worker and shared-configuration names.
pub(crate) const MAX_NAME_LENGTH: usize = 256;
/// Maximum length of environment and decision endpoint identifiers.
pub(crate) const MAX_ID_LENGTH: usize = 256;

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Authorize node configuration file model.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizeNodeConfig {
    /// Attribute map, statement codes, and continue mode.
    #[serde(default)]
    pub node: NodeSection,
    /// Credential and endpoint source selection.
    pub source: SourceConfig,
}

/// Node-level settings shared by every credential strategy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeSection {
    /// Ordered session-state attribute names forwarded to the endpoint.
    #[serde(default)]
    pub attribute_map: Vec<String>,
    /// Statement codes routed as pass-through custom outcomes.
    #[serde(default)]
    pub statement_codes: Vec<String>,
    /// Collapses declared outcomes to a single continue edge in the host UI.
    #[serde(default)]
    pub use_continue: bool,
}

/// Credential and endpoint source selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Literal endpoint URL with a session-state token attribute.
    Static {
        /// Base URL of the governance-engine endpoint.
        endpoint_url: String,
        /// Session-state attribute holding the bearer token.
        access_token_attribute: String,
        /// Allow cleartext HTTP endpoints (explicit opt-in).
        #[serde(default)]
        allow_http: bool,
    },
    /// Named worker credential from the host directory.
    Worker {
        /// Directory name of the worker credential.
        worker_name: String,
        /// Decision endpoint within the worker's environment.
        decision_endpoint_id: String,
    },
    /// Named shared environment configuration.
    Environment {
        /// Name of the shared configuration entry.
        name: String,
        /// Region hosting the environment.
        region: Region,
        /// Environment containing the decision endpoint.
        environment_id: String,
        /// Decision endpoint within that environment.
        decision_endpoint_id: String,
    },
}

impl AuthorizeNodeConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path);
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.node.validate()?;
        self.source.validate()
    }

    /// Converts the node section into the core runtime configuration.
    #[must_use]
    pub fn node_config(&self) -> NodeConfig {
        NodeConfig {
            attribute_map: self.node.attribute_map.clone(),
            statement_codes: self.node.statement_codes.clone(),
            use_continue: self.node.use_continue,
        }
    }

    /// Converts the source section into the core credential source.
    #[must_use]
    pub fn credential_source(&self) -> CredentialSource {
        match &self.source {
            SourceConfig::Static {
                endpoint_url,
                access_token_attribute,
                ..
            } => CredentialSource::Static {
                endpoint_url: endpoint_url.clone(),
                access_token_attribute: access_token_attribute.clone(),
            },
            SourceConfig::Worker {
                worker_name,
                decision_endpoint_id,
            } => CredentialSource::Worker {
                worker_name: worker_name.clone(),
                decision_endpoint_id: DecisionEndpointId::new(decision_endpoint_id.clone()),
            },
            SourceConfig::Environment {
                name,
                region,
                environment_id,
                decision_endpoint_id,
            } => CredentialSource::Environment {
                settings: EnvironmentSettings {
                    name: name.clone(),
                    region: *region,
                    environment_id: EnvironmentId::new(environment_id.clone()),
                },
                decision_endpoint_id: DecisionEndpointId::new(decision_endpoint_id.clone()),
            },
        }
    }
}

impl NodeSection {
    /// Validates attribute and statement-code lists.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.attribute_map.len() > MAX_ATTRIBUTES {
            return Err(ConfigError::Invalid("node.attribute_map exceeds limit".to_string()));
        }
        for name in &self.attribute_map {
            validate_field("node.attribute_map entry", name, MAX_ATTRIBUTE_NAME_LENGTH)?;
        }
        if has_duplicates(&self.attribute_map) {
            return Err(ConfigError::Invalid(
                "node.attribute_map contains duplicates".to_string(),
            ));
        }

        if self.statement_codes.len() > MAX_STATEMENT_CODES {
            return Err(ConfigError::Invalid("node.statement_codes exceeds limit".to_string()));
        }
        for code in &self.statement_codes {
            validate_field("node.statement_codes entry", code, MAX_STATEMENT_CODE_LENGTH)?;
            if Outcome::is_reserved_id(code) {
                return Err(ConfigError::Invalid(format!(
                    "node.statement_codes entry `{code}` shadows a reserved outcome"
                )));
            }
        }
        if has_duplicates(&self.statement_codes) {
            return Err(ConfigError::Invalid(
                "node.statement_codes contains duplicates".to_string(),
            ));
        }
        Ok(())
    }
}

impl SourceConfig {
    /// Validates the selected credential strategy.
    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Static {
                endpoint_url,
                access_token_attribute,
                allow_http,
            } => {
                validate_endpoint_url(endpoint_url, *allow_http)?;
                validate_field(
                    "source.access_token_attribute",
                    access_token_attribute,
                    MAX_ATTRIBUTE_NAME_LENGTH,
                )
            }
            Self::Worker {
                worker_name,
                decision_endpoint_id,
            } => {
                validate_field("source.worker_name", worker_name, MAX_NAME_LENGTH)?;
                validate_identifier("source.decision_endpoint_id", decision_endpoint_id)
            }
            Self::Environment {
                name,
                environment_id,
                decision_endpoint_id,
                ..
            } => {
                validate_field("source.name", name, MAX_NAME_LENGTH)?;
                validate_identifier("source.environment_id", environment_id)?;
                validate_identifier("source.decision_endpoint_id", decision_endpoint_id)
            }
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(env_path);
    }
    PathBuf::from(DEFAULT_CONFIG_NAME)
}

/// Validates the config file path against length constraints.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.to_string_lossy().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    Ok(())
}

/// Validates a required string field against a length limit.
fn validate_field(field: &str, value: &str, max_length: usize) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() != value.len() {
        return Err(ConfigError::Invalid(format!(
            "{field} must not have leading or trailing whitespace"
        )));
    }
    if value.len() > max_length {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    Ok(())
}

/// Validates a URL-path-safe identifier.
fn validate_identifier(field: &str, value: &str) -> Result<(), ConfigError> {
    validate_field(field, value, MAX_ID_LENGTH)?;
    let safe = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if !safe {
        return Err(ConfigError::Invalid(format!(
            "{field} must contain only alphanumerics, `-`, `_`, or `.`"
        )));
    }
    Ok(())
}

/// Validates the static strategy's endpoint URL.
fn validate_endpoint_url(value: &str, allow_http: bool) -> Result<(), ConfigError> {
    validate_field("source.endpoint_url", value, MAX_URL_LENGTH)?;
    let url = Url::parse(value)
        .map_err(|_| ConfigError::Invalid("source.endpoint_url is not a valid url".to_string()))?;
    match url.scheme() {
        "https" => {}
        "http" if allow_http => {}
        _ => {
            return Err(ConfigError::Invalid(
                "source.endpoint_url must use https (or http with allow_http)".to_string(),
            ));
        }
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(ConfigError::Invalid(
            "source.endpoint_url must not embed credentials".to_string(),
        ));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::Invalid("source.endpoint_url requires a host".to_string()));
    }
    Ok(())
}

/// Reports whether a list contains duplicate entries.
fn has_duplicates(values: &[String]) -> bool {
    values
        .iter()
        .enumerate()
        .any(|(index, value)| values[..index].contains(value))
}
