// crates/authorize-node-config/src/lib.rs
// ============================================================================
// Module: Authorize Node Config Library
// Description: Public API surface for node configuration.
// Purpose: Expose the config model, validation, and core conversions.
// Dependencies: crate::config
// ============================================================================

//! ## Overview
//! This crate owns the TOML-facing configuration model for authorize nodes.
//! Parsing is strict and fail-closed; validated configuration converts into
//! the core `NodeConfig` and `CredentialSource` consumed by the flow.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuthorizeNodeConfig;
pub use config::ConfigError;
pub use config::NodeSection;
pub use config::SourceConfig;
