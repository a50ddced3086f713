// crates/authorize-node-core/src/lib.rs
// ============================================================================
// Module: Authorize Node Core Library
// Description: Public API surface for the authorize node core.
// Purpose: Expose core types, interfaces, and the decision-request flow.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Authorize node core implements the decision-request/outcome-mapping flow
//! for authentication-tree nodes that consult an external authorization
//! decision service. It is host-agnostic and integrates through explicit
//! interfaces: the host supplies session state, token collaborators, and a
//! decision client; the core guarantees exactly one outcome per invocation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::CancelToken;
pub use interfaces::Credential;
pub use interfaces::CredentialError;
pub use interfaces::CredentialResolver;
pub use interfaces::DecisionClient;
pub use interfaces::DecisionError;
pub use interfaces::DecisionRequest;
pub use interfaces::EnvironmentTokenSource;
pub use interfaces::WorkerTokenSource;
pub use runtime::AuthorizeNode;
pub use runtime::CredentialSource;
pub use runtime::FlowError;
pub use runtime::InputBinding;
pub use runtime::NullTokenSource;
pub use runtime::SourceCredentialResolver;
pub use runtime::collect_attributes;
pub use runtime::declare_outcomes;
pub use runtime::declared_inputs;
pub use runtime::declared_outputs;
pub use runtime::resolve_outcome;
