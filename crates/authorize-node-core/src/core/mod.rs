// crates/authorize-node-core/src/core/mod.rs
// ============================================================================
// Module: Authorize Node Core Types
// Description: Canonical decision, outcome, state, and configuration types.
// Purpose: Provide stable, serializable types shared by every flow component.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types define the decision wire model, the closed outcome set, the
//! two-region session state, and per-node configuration. These types are the
//! canonical source of truth for the client crate and the configuration
//! crate.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod decision;
pub mod identifiers;
pub mod outcome;
pub mod settings;
pub mod state;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use decision::BodyKey;
pub use decision::Decision;
pub use decision::DecisionResponse;
pub use decision::ParameterPayload;
pub use decision::Statement;
pub use identifiers::AccessToken;
pub use identifiers::DecisionEndpointId;
pub use identifiers::EnvironmentId;
pub use outcome::DeclaredOutcome;
pub use outcome::Outcome;
pub use outcome::RESERVED_OUTCOME_IDS;
pub use settings::EnvironmentSettings;
pub use settings::NodeConfig;
pub use settings::Region;
pub use settings::Worker;
pub use state::DECISION_KEY;
pub use state::ERROR_KEY;
pub use state::ERROR_TRACE_KEY;
pub use state::SessionState;
