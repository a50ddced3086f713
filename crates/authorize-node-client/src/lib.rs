// crates/authorize-node-client/src/lib.rs
// ============================================================================
// Module: Authorize Node Client
// Description: Blocking HTTP implementation of the decision client seam.
// Purpose: Provide the production transport aligned with authorize-node-core.
// Dependencies: authorize-node-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! This crate ships the production [`authorize_node_core::DecisionClient`]
//! implementation: a bounded, bearer-authenticated, cancellable blocking
//! POST to the policy decision endpoint. Hosts construct one client per
//! process and share it across node invocations.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod http;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use http::HttpClientConfig;
pub use http::HttpDecisionClient;
