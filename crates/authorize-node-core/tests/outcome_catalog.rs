// crates/authorize-node-core/tests/outcome_catalog.rs
// ============================================================================
// Module: Outcome Catalog Tests
// Description: Tests for declared outcomes, labels, and state bindings.
// ============================================================================
//! ## Overview
//! Validates the declared outcome order, continue-mode collapse, display
//! labels, and the input/output bindings reported to the host.

use authorize_node_core::CredentialSource;
use authorize_node_core::DecisionEndpointId;
use authorize_node_core::NodeConfig;
use authorize_node_core::declare_outcomes;
use authorize_node_core::declared_inputs;
use authorize_node_core::declared_outputs;

/// Builds an owned statement-code list.
fn codes(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

// ============================================================================
// SECTION: Declared Outcomes
// ============================================================================

#[test]
fn test_default_catalog_lists_fixed_outcomes() {
    let outcomes = declare_outcomes(false, &[]);
    let ids: Vec<&str> = outcomes.iter().map(|declared| declared.outcome.id()).collect();
    assert_eq!(ids, ["permit", "deny", "indeterminate", "clientError"]);
}

#[test]
fn test_configured_codes_extend_catalog_in_order() {
    let outcomes = declare_outcomes(false, &codes(&["REVIEW", "DENIED"]));
    let ids: Vec<&str> = outcomes.iter().map(|declared| declared.outcome.id()).collect();
    assert_eq!(ids, ["permit", "deny", "indeterminate", "REVIEW", "DENIED", "clientError"]);
}

#[test]
fn test_continue_mode_collapses_catalog() {
    let outcomes = declare_outcomes(true, &codes(&["REVIEW", "DENIED"]));
    let ids: Vec<&str> = outcomes.iter().map(|declared| declared.outcome.id()).collect();
    assert_eq!(ids, ["continue", "clientError"]);
}

#[test]
fn test_catalog_labels_use_display_names() {
    let outcomes = declare_outcomes(false, &codes(&["REVIEW"]));
    let labels: Vec<&str> = outcomes.iter().map(|declared| declared.label.as_str()).collect();
    assert_eq!(labels, ["Permit", "Deny", "Indeterminate", "REVIEW", "Error"]);
}

#[test]
fn test_continue_mode_labels() {
    let outcomes = declare_outcomes(true, &[]);
    let labels: Vec<&str> = outcomes.iter().map(|declared| declared.label.as_str()).collect();
    assert_eq!(labels, ["Continue", "Error"]);
}

// ============================================================================
// SECTION: State Bindings
// ============================================================================

#[test]
fn test_static_source_declares_required_token_input() {
    let config = NodeConfig {
        attribute_map: vec!["riskScore".to_owned()],
        statement_codes: Vec::new(),
        use_continue: false,
    };
    let source = CredentialSource::Static {
        endpoint_url: "https://pdp.example.com".to_owned(),
        access_token_attribute: "pdpToken".to_owned(),
    };

    let inputs = declared_inputs(&config, &source);

    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0].name, "pdpToken");
    assert!(inputs[0].required);
    assert_eq!(inputs[1].name, "riskScore");
    assert!(!inputs[1].required);
}

#[test]
fn test_worker_source_declares_only_mapped_inputs() {
    let config = NodeConfig {
        attribute_map: vec!["riskScore".to_owned(), "deviceId".to_owned()],
        statement_codes: Vec::new(),
        use_continue: false,
    };
    let source = CredentialSource::Worker {
        worker_name: "orders-worker".to_owned(),
        decision_endpoint_id: DecisionEndpointId::new("dep-1"),
    };

    let inputs = declared_inputs(&config, &source);

    let names: Vec<&str> = inputs.iter().map(|binding| binding.name.as_str()).collect();
    assert_eq!(names, ["riskScore", "deviceId"]);
    assert!(inputs.iter().all(|binding| !binding.required));
}

#[test]
fn test_declared_outputs_name_decision_key() {
    assert_eq!(declared_outputs(), ["decision"]);
}
