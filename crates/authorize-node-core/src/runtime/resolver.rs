// crates/authorize-node-core/src/runtime/resolver.rs
// ============================================================================
// Module: Outcome Resolver
// Description: Maps a decision response onto the closed outcome set.
// Purpose: Apply statement-code precedence over the coarse decision field.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Resolution is a pure function over the parsed response and the configured
//! statement codes, in strict order: a configured code on the first
//! statement wins, then the decision field maps to its fixed outcome, and
//! anything unrecognized collapses to `clientError`. Continue-mode wiring
//! never reaches this function; the resolver always reports the concrete
//! outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Decision;
use crate::core::DecisionResponse;
use crate::core::Outcome;

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the outcome for one decision response.
///
/// Only `statements[0]` participates in code matching; an absent or empty
/// statement list falls through to the decision field. A matched code is
/// returned verbatim as a custom outcome.
#[must_use]
pub fn resolve_outcome(response: &DecisionResponse, configured_codes: &[String]) -> Outcome {
    if let Some(code) = response.first_statement_code() {
        if !code.is_empty() && configured_codes.iter().any(|candidate| candidate == code) {
            return Outcome::Custom(code.to_owned());
        }
    }

    match response.verdict() {
        Some(Decision::Permit) => Outcome::Permit,
        Some(Decision::Deny) => Outcome::Deny,
        Some(Decision::Indeterminate) => Outcome::Indeterminate,
        None => Outcome::ClientError,
    }
}
