// crates/authorize-node-core/src/core/decision.rs
// ============================================================================
// Module: Authorize Node Decision Model
// Description: Wire types for the policy decision request and response.
// Purpose: Provide lossless, serializable shapes for decision endpoint traffic.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The decision endpoint returns a JSON document with an optional `decision`
//! verdict and an optional ordered `statements` list. Response types here
//! capture unknown fields so the raw document round-trips unchanged into
//! session state. The request side is a flat attribute payload nested under a
//! provider-specific body key.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Request Payload
// ============================================================================

/// Outbound parameter payload keyed by attribute name.
///
/// Built fresh per invocation from session state; missing attributes are
/// carried as JSON null. Keys iterate in deterministic order.
pub type ParameterPayload = Map<String, Value>;

/// Top-level JSON key nesting the parameter payload in the request body.
///
/// The key is a provider-variant switch: PingAuthorize-style endpoints expect
/// `attributes`, PingOne Authorize decision endpoints expect `parameters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKey {
    /// `attributes`, used by governance-engine style endpoints.
    Attributes,
    /// `parameters`, used by decision-endpoint style endpoints.
    Parameters,
}

impl BodyKey {
    /// Returns the literal JSON key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Parameters => "parameters",
        }
    }
}

// ============================================================================
// SECTION: Decision Verdict
// ============================================================================

/// Authorization verdict carried in the response `decision` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The policy engine permits the request.
    Permit,
    /// The policy engine denies the request.
    Deny,
    /// The policy engine could not reach a verdict.
    Indeterminate,
}

impl Decision {
    /// Parses the raw `decision` field value.
    ///
    /// Matching is exact and case-sensitive; any other value (including an
    /// empty string) is treated as unrecognized and returns `None`.
    #[must_use]
    pub fn from_field(value: &str) -> Option<Self> {
        match value {
            "PERMIT" => Some(Self::Permit),
            "DENY" => Some(Self::Deny),
            "INDETERMINATE" => Some(Self::Indeterminate),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Decision Response
// ============================================================================

/// One statement attached to a decision response.
///
/// Statements carry a short routing code plus arbitrary provider fields,
/// which are preserved verbatim for session-state storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement code usable as a custom outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Provider fields preserved without interpretation.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parsed decision endpoint response document.
///
/// # Invariants
/// - Absent `decision` and absent or empty `statements` are valid shapes;
///   outcome resolution falls through instead of failing.
/// - Unknown top-level fields are preserved so serializing the response
///   reproduces the original document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionResponse {
    /// Raw verdict string, typically PERMIT, DENY, or INDETERMINATE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    /// Ordered statement list; only the first entry participates in routing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<Statement>,
    /// Provider fields preserved without interpretation.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DecisionResponse {
    /// Returns the raw `decision` field when present.
    #[must_use]
    pub fn decision_field(&self) -> Option<&str> {
        self.decision.as_deref()
    }

    /// Returns the parsed verdict when the `decision` field is recognized.
    #[must_use]
    pub fn verdict(&self) -> Option<Decision> {
        self.decision_field().and_then(Decision::from_field)
    }

    /// Returns the code of the first statement when present.
    #[must_use]
    pub fn first_statement_code(&self) -> Option<&str> {
        self.statements.first().and_then(|statement| statement.code.as_deref())
    }
}
