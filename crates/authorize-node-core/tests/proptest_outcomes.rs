// crates/authorize-node-core/tests/proptest_outcomes.rs
// ============================================================================
// Module: Outcome Property-Based Tests
// Description: Property tests for outcome resolution and identifier mapping.
// Purpose: Ensure resolution always lands inside the declared outcome set.
// ============================================================================

//! Property-based tests for outcome resolution invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use authorize_node_core::DecisionResponse;
use authorize_node_core::Outcome;
use authorize_node_core::declare_outcomes;
use authorize_node_core::resolve_outcome;
use proptest::prelude::*;
use serde_json::json;

/// Strategy producing decision field values, biased toward recognized verdicts.
fn decision_field_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("PERMIT".to_owned())),
        Just(Some("DENY".to_owned())),
        Just(Some("INDETERMINATE".to_owned())),
        "[A-Za-z]{0,12}".prop_map(Some),
    ]
}

/// Builds a response from an optional decision and an optional first code.
fn response_with(decision: Option<String>, code: Option<String>) -> DecisionResponse {
    let mut document = serde_json::Map::new();
    if let Some(decision) = decision {
        document.insert("decision".to_owned(), json!(decision));
    }
    if let Some(code) = code {
        document.insert("statements".to_owned(), json!([{ "code": code }]));
    }
    serde_json::from_value(serde_json::Value::Object(document)).unwrap()
}

proptest! {
    #[test]
    fn resolution_stays_within_declared_outcomes(
        decision in decision_field_strategy(),
        code in prop::option::of("[A-Za-z0-9_-]{1,12}"),
        configured in prop::collection::vec("[A-Za-z0-9_-]{1,12}", 0 .. 4),
    ) {
        let response = response_with(decision, code);
        let outcome = resolve_outcome(&response, &configured);
        let declared = declare_outcomes(false, &configured);
        prop_assert!(declared.iter().any(|entry| entry.outcome == outcome));
    }

    #[test]
    fn configured_first_code_always_wins(
        decision in decision_field_strategy(),
        code in "[A-Za-z0-9_-]{1,12}",
    ) {
        let response = response_with(decision, Some(code.clone()));
        let configured = vec![code.clone()];
        prop_assert_eq!(resolve_outcome(&response, &configured), Outcome::Custom(code));
    }

    #[test]
    fn unconfigured_inputs_resolve_to_fixed_outcomes(
        decision in decision_field_strategy(),
    ) {
        let response = response_with(decision, None);
        let outcome = resolve_outcome(&response, &[]);
        prop_assert!(matches!(
            outcome,
            Outcome::Permit | Outcome::Deny | Outcome::Indeterminate | Outcome::ClientError
        ));
    }

    #[test]
    fn outcome_identifier_round_trips(id in "[A-Za-z][A-Za-z0-9]{0,12}") {
        let outcome = Outcome::from_id(&id);
        prop_assert_eq!(outcome.id(), id.as_str());
    }
}
