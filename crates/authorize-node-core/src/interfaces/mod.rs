// crates/authorize-node-core/src/interfaces/mod.rs
// ============================================================================
// Module: Authorize Node Interfaces
// Description: Contract surfaces between the flow, the host, and the network.
// Purpose: Define credential, token, and decision-client seams without I/O.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the decision flow integrates with external systems
//! without embedding backend-specific details. Token issuers and the HTTP
//! transport are host- or client-crate-supplied; everything here is pure
//! contract. Implementations must fail closed: any credential or transport
//! problem becomes a typed error that the flow maps to the `clientError`
//! outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use thiserror::Error;

use crate::core::AccessToken;
use crate::core::BodyKey;
use crate::core::DecisionResponse;
use crate::core::EnvironmentSettings;
use crate::core::ParameterPayload;
use crate::core::SessionState;
use crate::core::Worker;

// ============================================================================
// SECTION: Cancellation
// ============================================================================

/// Shared cancellation flag for the blocking decision call.
///
/// # Invariants
/// - Observation never clears the flag: once cancelled, every later check
///   still reports cancellation, mirroring restored thread-interrupt
///   semantics.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    /// Set once by the host, never cleared by the flow.
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of any in-flight decision call.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Reports whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// ============================================================================
// SECTION: Credential Resolution
// ============================================================================

/// Resolved material for one decision request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Bearer token presented to the decision endpoint.
    pub access_token: AccessToken,
    /// Fully composed decision endpoint URL.
    pub endpoint: String,
    /// Provider-variant body key for the request payload.
    pub body_key: BodyKey,
}

/// Credential resolution errors.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The configured token attribute is absent or not a string.
    #[error("access token attribute `{0}` missing from session state")]
    MissingTokenAttribute(String),
    /// The named worker does not exist in the host directory.
    #[error("worker `{0}` not found")]
    WorkerNotFound(String),
    /// The token issuer returned no token for the binding.
    #[error("no access token issued for `{0}`")]
    MissingToken(String),
    /// The token issuer or directory failed.
    #[error("token lookup failed: {0}")]
    TokenLookup(String),
}

/// Resolves the bearer token and target endpoint for one invocation.
pub trait CredentialResolver {
    /// Produces the credential for the next decision request.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the token or endpoint cannot be
    /// resolved; the flow reports `clientError` without calling the endpoint.
    fn resolve(&self, state: &SessionState) -> Result<Credential, CredentialError>;
}

/// Host directory and token issuer for worker credentials.
pub trait WorkerTokenSource {
    /// Looks up a worker record by directory name.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when the directory itself fails; an
    /// unknown name is `Ok(None)`.
    fn find_worker(&self, name: &str) -> Result<Option<Worker>, CredentialError>;

    /// Issues a bearer token bound to a worker record.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when issuance fails; an issuer that
    /// declines to produce a token returns `Ok(None)`.
    fn access_token(&self, worker: &Worker) -> Result<Option<AccessToken>, CredentialError>;
}

/// Process-wide token utility for shared environment configurations.
pub trait EnvironmentTokenSource {
    /// Issues a bearer token bound to a shared environment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when issuance fails; an issuer that
    /// declines to produce a token returns `Ok(None)`.
    fn access_token(
        &self,
        settings: &EnvironmentSettings,
    ) -> Result<Option<AccessToken>, CredentialError>;
}

// ============================================================================
// SECTION: Decision Client
// ============================================================================

/// One fully specified decision endpoint request.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionRequest {
    /// Fully composed endpoint URL.
    pub target_url: String,
    /// Bearer token for the `Authorization` header.
    pub bearer_token: AccessToken,
    /// Provider-variant key nesting the payload in the JSON body.
    pub body_key: BodyKey,
    /// Attribute payload collected from session state.
    pub payload: ParameterPayload,
}

/// Decision endpoint call errors.
#[derive(Debug, Error)]
pub enum DecisionError {
    /// The endpoint answered with a non-success status.
    #[error("decision endpoint rejected request with status {status}: {body}")]
    RemoteRejection {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Raw response body text.
        body: String,
    },
    /// The request could not be sent or the response could not be read.
    #[error("decision request transport failure: {0}")]
    Transport(String),
    /// The host cancelled the blocking call.
    #[error("decision request cancelled")]
    Interrupted,
    /// The response body is not a JSON document of the expected shape.
    #[error("malformed decision response: {0}")]
    MalformedResponse(String),
}

/// Blocking client for the policy decision endpoint.
pub trait DecisionClient {
    /// Sends one decision request and parses the response.
    ///
    /// Blocks the calling thread until the endpoint answers, the transport
    /// fails, or `cancel` is observed.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError`] classifying rejection, transport,
    /// cancellation, and malformed-response failures. The client never
    /// chooses an outcome.
    fn evaluate(
        &self,
        request: &DecisionRequest,
        cancel: &CancelToken,
    ) -> Result<DecisionResponse, DecisionError>;
}
