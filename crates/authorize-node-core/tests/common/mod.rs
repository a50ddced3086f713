// crates/authorize-node-core/tests/common/mod.rs
// ============================================================================
// Module: Core Test Helpers
// Description: Shared stubs and fixtures for credential and flow tests.
// ============================================================================
//! ## Overview
//! Stub collaborators that record their inputs, plus fixture builders for
//! decision documents, credentials, and session state.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::sync::Arc;
use std::sync::Mutex;

use authorize_node_core::AccessToken;
use authorize_node_core::BodyKey;
use authorize_node_core::CancelToken;
use authorize_node_core::Credential;
use authorize_node_core::CredentialError;
use authorize_node_core::CredentialResolver;
use authorize_node_core::DecisionClient;
use authorize_node_core::DecisionError;
use authorize_node_core::DecisionRequest;
use authorize_node_core::DecisionResponse;
use authorize_node_core::EnvironmentId;
use authorize_node_core::EnvironmentSettings;
use authorize_node_core::EnvironmentTokenSource;
use authorize_node_core::Region;
use authorize_node_core::SessionState;
use authorize_node_core::Worker;
use authorize_node_core::WorkerTokenSource;
use serde_json::Value;

// ============================================================================
// SECTION: Fixture Builders
// ============================================================================

/// Parses a JSON document literal into a decision response.
pub fn decision_response(document: Value) -> DecisionResponse {
    serde_json::from_value(document).unwrap()
}

/// Builds a credential pointing at a governance-engine endpoint.
pub fn sample_credential() -> Credential {
    Credential {
        access_token: AccessToken::new("test-token"),
        endpoint: "https://pdp.example.com/governance-engine".to_owned(),
        body_key: BodyKey::Attributes,
    }
}

/// Builds a worker record in the default North America tenant.
pub fn sample_worker() -> Worker {
    Worker {
        name: "orders-worker".to_owned(),
        api_url: "https://api.pingone.com/v1".to_owned(),
        environment_id: EnvironmentId::new("env-1234"),
    }
}

/// Builds a shared environment configuration in the Europe region.
pub fn sample_settings() -> EnvironmentSettings {
    EnvironmentSettings {
        name: "shared-eu".to_owned(),
        region: Region::Europe,
        environment_id: EnvironmentId::new("env-5678"),
    }
}

/// Builds a session state with a single transient entry.
pub fn state_with_transient(key: &str, value: Value) -> SessionState {
    let mut state = SessionState::new();
    state.insert_transient(key, value);
    state
}

/// Builds a session state with a single persistent entry.
pub fn state_with_persistent(key: &str, value: Value) -> SessionState {
    let mut state = SessionState::new();
    state.insert_persistent(key, value);
    state
}

// ============================================================================
// SECTION: Stub Collaborators
// ============================================================================

/// Decision client stub returning one queued result and recording requests.
pub struct StubClient {
    /// Result handed to the next evaluate call.
    result: Mutex<Option<Result<DecisionResponse, DecisionError>>>,
    /// Requests observed so far, shared with the owning test.
    requests: Arc<Mutex<Vec<DecisionRequest>>>,
}

impl StubClient {
    /// Creates a client that answers with the given response.
    pub fn answering(response: DecisionResponse) -> Self {
        Self {
            result: Mutex::new(Some(Ok(response))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a client that fails with the given error.
    pub fn failing(error: DecisionError) -> Self {
        Self {
            result: Mutex::new(Some(Err(error))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handle to the requests recorded by this client.
    pub fn requests(&self) -> Arc<Mutex<Vec<DecisionRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl DecisionClient for StubClient {
    fn evaluate(
        &self,
        request: &DecisionRequest,
        _cancel: &CancelToken,
    ) -> Result<DecisionResponse, DecisionError> {
        self.requests.lock().unwrap().push(request.clone());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(DecisionError::Transport("stub exhausted".to_owned())))
    }
}

/// Credential resolver stub returning a fixed credential.
pub struct FixedCredentials {
    /// Credential returned on every resolve call.
    pub credential: Credential,
}

impl CredentialResolver for FixedCredentials {
    fn resolve(&self, _state: &SessionState) -> Result<Credential, CredentialError> {
        Ok(self.credential.clone())
    }
}

/// Credential resolver stub that always fails.
pub struct FailingCredentials;

impl CredentialResolver for FailingCredentials {
    fn resolve(&self, _state: &SessionState) -> Result<Credential, CredentialError> {
        Err(CredentialError::TokenLookup("token service unavailable".to_owned()))
    }
}

/// Worker directory stub with one optional record and token.
pub struct StubWorkerDirectory {
    /// Record returned when the requested name matches.
    pub worker: Option<Worker>,
    /// Token issued for any record.
    pub token: Option<AccessToken>,
    /// When set, every call fails with this lookup error.
    pub error: Option<String>,
}

impl WorkerTokenSource for StubWorkerDirectory {
    fn find_worker(&self, name: &str) -> Result<Option<Worker>, CredentialError> {
        if let Some(message) = &self.error {
            return Err(CredentialError::TokenLookup(message.clone()));
        }
        Ok(self.worker.clone().filter(|worker| worker.name == name))
    }

    fn access_token(&self, _worker: &Worker) -> Result<Option<AccessToken>, CredentialError> {
        if let Some(message) = &self.error {
            return Err(CredentialError::TokenLookup(message.clone()));
        }
        Ok(self.token.clone())
    }
}

/// Environment token stub with one optional token.
pub struct StubEnvironmentTokens {
    /// Token issued for any configuration.
    pub token: Option<AccessToken>,
    /// When set, every call fails with this lookup error.
    pub error: Option<String>,
}

impl EnvironmentTokenSource for StubEnvironmentTokens {
    fn access_token(
        &self,
        _settings: &EnvironmentSettings,
    ) -> Result<Option<AccessToken>, CredentialError> {
        if let Some(message) = &self.error {
            return Err(CredentialError::TokenLookup(message.clone()));
        }
        Ok(self.token.clone())
    }
}
