// crates/authorize-node-core/src/core/identifiers.rs
// ============================================================================
// Module: Authorize Node Identifiers
// Description: Canonical opaque identifiers for decision endpoints and tokens.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the string-based identifiers used throughout the
//! authorize node. Identifiers are opaque and serialize as strings. Validation
//! is handled at configuration boundaries rather than within these wrappers.
//! The access token is deliberately not an identifier: it is secret material,
//! never serialized, and its `Debug` output is redacted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Environment identifier for a policy environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentId(String);

impl EnvironmentId {
    /// Creates a new environment identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for EnvironmentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EnvironmentId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Decision endpoint identifier within a policy environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionEndpointId(String);

impl DecisionEndpointId {
    /// Creates a new decision endpoint identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecisionEndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DecisionEndpointId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DecisionEndpointId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Access Token
// ============================================================================

/// Opaque bearer token presented to the decision endpoint.
///
/// # Invariants
/// - The token value is secret material: it has no `Display` form, no serde
///   support, and a redacted `Debug` representation.
/// - Tokens live for a single decision request; caching belongs to the
///   host-side token issuer.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw bearer token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value for header construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
