// crates/authorize-node-core/src/core/state.rs
// ============================================================================
// Module: Authorize Node Session State
// Description: Explicit two-region session-state model with documented keys.
// Purpose: Replace the host's ambient state context with a typed structure.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Session state is the in-flight authentication journey's key-value store.
//! It is modeled as two explicit regions: persistent entries survive the
//! journey, transient entries live only for the current authentication and
//! are where this node records its decision document and failure
//! diagnostics. Reads consult the transient region first.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: State Keys
// ============================================================================

/// Transient key holding the raw decision response document on success.
pub const DECISION_KEY: &str = "decision";

/// Transient key holding the timestamped failure message.
pub const ERROR_KEY: &str = "authorizeNodeError";

/// Transient key holding the timestamped failure trace.
pub const ERROR_TRACE_KEY: &str = "authorizeNodeStackTrace";

// ============================================================================
// SECTION: Session State
// ============================================================================

/// Two-region session state passed by reference into the flow.
///
/// # Invariants
/// - The node only ever writes transient entries; persistent entries are
///   host-owned inputs.
/// - Key lookups consult the transient region first, then the persistent
///   region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Entries that persist across the authentication journey.
    #[serde(default)]
    persistent: BTreeMap<String, Value>,
    /// Entries scoped to the current authentication.
    #[serde(default)]
    transient: BTreeMap<String, Value>,
}

impl SessionState {
    /// Creates an empty session state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session state from existing regions.
    #[must_use]
    pub const fn from_regions(
        persistent: BTreeMap<String, Value>,
        transient: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            persistent,
            transient,
        }
    }

    /// Returns the value for a key, consulting transient entries first.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.transient.get(key).or_else(|| self.persistent.get(key))
    }

    /// Returns a transient entry.
    #[must_use]
    pub fn transient(&self, key: &str) -> Option<&Value> {
        self.transient.get(key)
    }

    /// Returns a persistent entry.
    #[must_use]
    pub fn persistent(&self, key: &str) -> Option<&Value> {
        self.persistent.get(key)
    }

    /// Inserts a persistent entry, replacing any existing value.
    pub fn insert_persistent(&mut self, key: impl Into<String>, value: Value) {
        self.persistent.insert(key.into(), value);
    }

    /// Inserts a transient entry, replacing any existing value.
    pub fn insert_transient(&mut self, key: impl Into<String>, value: Value) {
        self.transient.insert(key.into(), value);
    }
}
