// crates/authorize-node-core/src/runtime/collector.rs
// ============================================================================
// Module: Attribute Collector
// Description: Builds the outbound parameter payload from session state.
// Purpose: Read configured attributes without failing on missing values.
// Dependencies: crate::core, serde_json
// ============================================================================

//! ## Overview
//! Attribute collection is a pure read: every configured name lands in the
//! payload, with JSON null standing in for anything the session does not
//! hold. Collection itself can never fail; an endpoint that requires an
//! attribute enforces that on its side of the wire.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::core::ParameterPayload;
use crate::core::SessionState;

// ============================================================================
// SECTION: Collection
// ============================================================================

/// Collects the configured attributes from session state.
///
/// Missing or non-collectible values pass through as JSON null. Duplicate
/// names collapse to a single key; the last occurrence wins.
#[must_use]
pub fn collect_attributes(attribute_map: &[String], state: &SessionState) -> ParameterPayload {
    let mut payload = ParameterPayload::new();
    for name in attribute_map {
        let value = state.get(name).cloned().unwrap_or(Value::Null);
        payload.insert(name.clone(), value);
    }
    payload
}
