// crates/authorize-node-core/src/runtime/flow.rs
// ============================================================================
// Module: Authorize Node Flow
// Description: The inbound process entry point composing all flow components.
// Purpose: Convert every internal failure into the clientError outcome.
// Dependencies: crate::{core, interfaces, runtime}, serde_json, time, tracing
// ============================================================================

//! ## Overview
//! One invocation runs collector, credential resolution, the blocking
//! decision call, and outcome resolution sequentially on the calling thread.
//! The flow owns the error boundary: nothing escapes to the host tree
//! engine. Failures are logged, recorded as timestamped transient state
//! entries, and reported uniformly as `clientError`; successful responses
//! land in the transient `decision` entry before outcome resolution.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::error::Error as _;

use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::core::DECISION_KEY;
use crate::core::ERROR_KEY;
use crate::core::ERROR_TRACE_KEY;
use crate::core::NodeConfig;
use crate::core::Outcome;
use crate::core::SessionState;
use crate::interfaces::CancelToken;
use crate::interfaces::CredentialError;
use crate::interfaces::CredentialResolver;
use crate::interfaces::DecisionClient;
use crate::interfaces::DecisionError;
use crate::interfaces::DecisionRequest;
use crate::runtime::collector::collect_attributes;
use crate::runtime::resolver::resolve_outcome;

// ============================================================================
// SECTION: Flow Errors
// ============================================================================

/// Union of everything that can fail inside one invocation.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Credential or endpoint resolution failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),
    /// The decision call failed.
    #[error(transparent)]
    Decision(#[from] DecisionError),
    /// The parsed response could not be rendered back to JSON for storage.
    #[error("decision response could not be stored: {0}")]
    ResponseStorage(String),
}

// ============================================================================
// SECTION: Authorize Node
// ============================================================================

/// Decision-request flow for one configured node instance.
///
/// Generic over the credential resolver and the decision client so hosts and
/// tests can substitute either seam.
pub struct AuthorizeNode<R, C> {
    /// Immutable node configuration.
    config: NodeConfig,
    /// Configured credential strategy.
    resolver: R,
    /// Blocking decision endpoint client.
    client: C,
}

impl<R, C> AuthorizeNode<R, C>
where
    R: CredentialResolver,
    C: DecisionClient,
{
    /// Creates a node from its configuration and collaborators.
    #[must_use]
    pub const fn new(config: NodeConfig, resolver: R, client: C) -> Self {
        Self {
            config,
            resolver,
            client,
        }
    }

    /// Returns the node configuration.
    #[must_use]
    pub const fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Processes one authentication step.
    ///
    /// Always produces exactly one outcome. Failures never propagate: they
    /// are written to transient state and reported as `clientError`.
    pub fn process(&self, state: &mut SessionState, cancel: &CancelToken) -> Outcome {
        match self.try_process(state, cancel) {
            Ok(outcome) => {
                tracing::debug!(outcome = outcome.id(), "decision flow completed");
                outcome
            }
            Err(error) => {
                tracing::warn!(error = %error, "decision flow failed");
                record_failure(state, &error);
                Outcome::ClientError
            }
        }
    }

    /// Runs the fallible portion of the flow.
    fn try_process(
        &self,
        state: &mut SessionState,
        cancel: &CancelToken,
    ) -> Result<Outcome, FlowError> {
        let payload = collect_attributes(&self.config.attribute_map, state);
        let credential = self.resolver.resolve(state)?;
        let request = DecisionRequest {
            target_url: credential.endpoint,
            bearer_token: credential.access_token,
            body_key: credential.body_key,
            payload,
        };

        tracing::debug!(endpoint = %request.target_url, "sending decision request");
        let response = self.client.evaluate(&request, cancel)?;

        let raw = serde_json::to_value(&response)
            .map_err(|error| FlowError::ResponseStorage(error.to_string()))?;
        state.insert_transient(DECISION_KEY, raw);

        Ok(resolve_outcome(&response, &self.config.statement_codes))
    }
}

// ============================================================================
// SECTION: Failure Recording
// ============================================================================

/// Writes timestamped failure diagnostics into transient state.
fn record_failure(state: &mut SessionState, error: &FlowError) {
    let stamp = timestamp_utc();
    state.insert_transient(ERROR_KEY, Value::String(format!("{stamp}: {error}")));
    state.insert_transient(
        ERROR_TRACE_KEY,
        Value::String(format!("{stamp}: {}", error_trace(error))),
    );
}

/// Renders the error with its source chain for the trace entry.
fn error_trace(error: &FlowError) -> String {
    let mut trace = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        trace.push_str("; caused by: ");
        trace.push_str(&cause.to_string());
        source = cause.source();
    }
    trace
}

/// Returns the current UTC time as an RFC 3339 string.
fn timestamp_utc() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string())
}
