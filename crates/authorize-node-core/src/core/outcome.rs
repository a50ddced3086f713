// crates/authorize-node-core/src/core/outcome.rs
// ============================================================================
// Module: Authorize Node Outcomes
// Description: Closed outcome enumeration with configured pass-through codes.
// Purpose: Make outcome routing exhaustiveness-checkable instead of stringly typed.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every node invocation produces exactly one outcome. Fixed outcomes carry
//! stable wire identifiers consumed by the host tree engine; configured
//! statement codes pass through verbatim as custom outcomes. Outcomes
//! serialize as their bare identifier string.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Wire identifiers reserved by the fixed outcome set.
///
/// Configured statement codes must not collide with these; configuration
/// validation rejects such codes so `Custom` never aliases a fixed variant.
pub const RESERVED_OUTCOME_IDS: [&str; 5] =
    ["permit", "deny", "indeterminate", "continue", "clientError"];

/// Named exit edge selected by one node invocation.
///
/// # Invariants
/// - Exactly one outcome is produced per invocation.
/// - `Continue` is declared to the host UI in continue mode but is never
///   produced by outcome resolution; continue-edge routing is host wiring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The decision endpoint permitted the request.
    Permit,
    /// The decision endpoint denied the request.
    Deny,
    /// The decision endpoint could not reach a verdict.
    Indeterminate,
    /// Pass-through edge collapsing all concrete outcomes in continue mode.
    Continue,
    /// Any processing failure, surfaced uniformly.
    ClientError,
    /// A configured statement code returned by the decision endpoint.
    Custom(String),
}

impl Outcome {
    /// Returns the wire identifier consumed by the host tree engine.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Permit => "permit",
            Self::Deny => "deny",
            Self::Indeterminate => "indeterminate",
            Self::Continue => "continue",
            Self::ClientError => "clientError",
            Self::Custom(code) => code,
        }
    }

    /// Returns the display label rendered by the host configuration UI.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Permit => "Permit",
            Self::Deny => "Deny",
            Self::Indeterminate => "Indeterminate",
            Self::Continue => "Continue",
            Self::ClientError => "Error",
            Self::Custom(code) => code,
        }
    }

    /// Parses a wire identifier, mapping reserved identifiers to their fixed
    /// variants and anything else to `Custom`.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "permit" => Self::Permit,
            "deny" => Self::Deny,
            "indeterminate" => Self::Indeterminate,
            "continue" => Self::Continue,
            "clientError" => Self::ClientError,
            other => Self::Custom(other.to_owned()),
        }
    }

    /// Reports whether an identifier collides with the fixed outcome set.
    #[must_use]
    pub fn is_reserved_id(id: &str) -> bool {
        RESERVED_OUTCOME_IDS.contains(&id)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        Ok(Self::from_id(&id))
    }
}

// ============================================================================
// SECTION: Declared Outcomes
// ============================================================================

/// One selectable outcome declared to the host configuration UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredOutcome {
    /// Outcome selected at runtime.
    pub outcome: Outcome,
    /// Display label shown to administrators.
    pub label: String,
}

impl DeclaredOutcome {
    /// Declares an outcome with its default display label.
    #[must_use]
    pub fn new(outcome: Outcome) -> Self {
        Self {
            label: outcome.label().to_owned(),
            outcome,
        }
    }
}
