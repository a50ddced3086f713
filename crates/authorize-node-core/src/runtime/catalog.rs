// crates/authorize-node-core/src/runtime/catalog.rs
// ============================================================================
// Module: Outcome Catalog
// Description: Declares selectable outcomes and state bindings to the host.
// Purpose: Drive the host configuration UI without touching runtime logic.
// Dependencies: crate::core, crate::runtime::credentials
// ============================================================================

//! ## Overview
//! The catalog is purely declarative: which exit edges a configured node
//! exposes, which session-state attributes it reads, and which keys it
//! writes. Continue mode collapses the declared edges to `continue` plus
//! `clientError`; it never changes what outcome resolution computes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::DECISION_KEY;
use crate::core::DeclaredOutcome;
use crate::core::NodeConfig;
use crate::core::Outcome;
use crate::runtime::credentials::CredentialSource;

// ============================================================================
// SECTION: Outcome Declaration
// ============================================================================

/// Declares the selectable outcomes for the current configuration.
///
/// With `use_continue` set, only the continue and error edges exist.
/// Otherwise the fixed verdict edges come first, then one edge per
/// configured code (label = the code itself), then the error edge.
#[must_use]
pub fn declare_outcomes(use_continue: bool, configured_codes: &[String]) -> Vec<DeclaredOutcome> {
    if use_continue {
        return vec![
            DeclaredOutcome::new(Outcome::Continue),
            DeclaredOutcome::new(Outcome::ClientError),
        ];
    }

    let mut outcomes = vec![
        DeclaredOutcome::new(Outcome::Permit),
        DeclaredOutcome::new(Outcome::Deny),
        DeclaredOutcome::new(Outcome::Indeterminate),
    ];
    for code in configured_codes {
        outcomes.push(DeclaredOutcome::new(Outcome::Custom(code.clone())));
    }
    outcomes.push(DeclaredOutcome::new(Outcome::ClientError));
    outcomes
}

// ============================================================================
// SECTION: State Bindings
// ============================================================================

/// One session-state attribute the node reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBinding {
    /// Session-state attribute name.
    pub name: String,
    /// Whether the attribute must be present for the node to succeed.
    pub required: bool,
}

/// Declares the session-state attributes the node reads.
///
/// The static strategy's token attribute is required; every mapped attribute
/// is optional because collection tolerates missing values.
#[must_use]
pub fn declared_inputs(config: &NodeConfig, source: &CredentialSource) -> Vec<InputBinding> {
    let mut inputs = Vec::new();
    if let CredentialSource::Static {
        access_token_attribute,
        ..
    } = source
    {
        inputs.push(InputBinding {
            name: access_token_attribute.clone(),
            required: true,
        });
    }
    for name in &config.attribute_map {
        inputs.push(InputBinding {
            name: name.clone(),
            required: false,
        });
    }
    inputs
}

/// Declares the session-state keys the node writes on success.
#[must_use]
pub fn declared_outputs() -> Vec<String> {
    vec![DECISION_KEY.to_owned()]
}
