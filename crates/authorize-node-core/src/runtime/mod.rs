// crates/authorize-node-core/src/runtime/mod.rs
// ============================================================================
// Module: Authorize Node Runtime
// Description: Collector, credential strategies, outcome resolution, and flow.
// Purpose: Execute the decision-request flow against host collaborators.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the decision-request flow: attribute
//! collection, credential strategy execution, the outcome mapping algorithm,
//! the declarative outcome catalog, and the top-level process entry point
//! that owns the error boundary.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod collector;
pub mod credentials;
pub mod flow;
pub mod resolver;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::InputBinding;
pub use catalog::declare_outcomes;
pub use catalog::declared_inputs;
pub use catalog::declared_outputs;
pub use collector::collect_attributes;
pub use credentials::CredentialSource;
pub use credentials::NullTokenSource;
pub use credentials::SourceCredentialResolver;
pub use flow::AuthorizeNode;
pub use flow::FlowError;
pub use resolver::resolve_outcome;
