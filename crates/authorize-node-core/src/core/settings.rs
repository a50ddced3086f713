// crates/authorize-node-core/src/core/settings.rs
// ============================================================================
// Module: Authorize Node Settings
// Description: Immutable per-node runtime configuration and endpoint records.
// Purpose: Carry host-validated configuration into the decision flow.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! These types are configuration as data: the host configuration store
//! validates and supplies them, the flow consumes them read-only. Worker and
//! environment records describe where decision endpoints live; `NodeConfig`
//! describes what one node instance sends and how it routes the result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::EnvironmentId;

// ============================================================================
// SECTION: Node Configuration
// ============================================================================

/// Immutable runtime configuration for one node instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
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

// ============================================================================
// SECTION: Endpoint Records
// ============================================================================

/// Worker credential record resolved from the host directory.
///
/// # Invariants
/// - `api_url` is the versioned API base (for example
///   `https://api.pingone.com/v1`) without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Directory name of the worker credential.
    pub name: String,
    /// Versioned API base URL for the worker's tenant.
    pub api_url: String,
    /// Environment the worker is bound to.
    pub environment_id: EnvironmentId,
}

/// Shared environment configuration referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSettings {
    /// Name of the shared configuration entry.
    pub name: String,
    /// Region hosting the environment.
    pub region: Region,
    /// Environment containing the decision endpoint.
    pub environment_id: EnvironmentId,
}

/// Hosting region determining the decision API domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// `api.pingone.com`
    NorthAmerica,
    /// `api.pingone.eu`
    Europe,
    /// `api.pingone.asia`
    AsiaPacific,
    /// `api.pingone.ca`
    Canada,
}

impl Region {
    /// Returns the regional API origin without a trailing slash.
    #[must_use]
    pub const fn api_domain(self) -> &'static str {
        match self {
            Self::NorthAmerica => "https://api.pingone.com",
            Self::Europe => "https://api.pingone.eu",
            Self::AsiaPacific => "https://api.pingone.asia",
            Self::Canada => "https://api.pingone.ca",
        }
    }
}
