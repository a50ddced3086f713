// crates/authorize-node-core/src/runtime/credentials.rs
// ============================================================================
// Module: Credential Strategies
// Description: The three configured credential/endpoint resolution strategies.
// Purpose: Unify near-duplicate token/endpoint paths behind one resolver.
// Dependencies: crate::core, crate::interfaces, serde
// ============================================================================

//! ## Overview
//! A node obtains its bearer token and target URL from one of three sources:
//! a session-state attribute paired with a literal endpoint URL, a named
//! worker credential, or a shared environment configuration. The source is
//! a closed enum selected by configuration; `SourceCredentialResolver`
//! executes whichever strategy is configured through host-supplied token
//! collaborators.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::AccessToken;
use crate::core::BodyKey;
use crate::core::DecisionEndpointId;
use crate::core::EnvironmentSettings;
use crate::core::SessionState;
use crate::core::Worker;
use crate::interfaces::Credential;
use crate::interfaces::CredentialError;
use crate::interfaces::CredentialResolver;
use crate::interfaces::EnvironmentTokenSource;
use crate::interfaces::WorkerTokenSource;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Path suffix appended to literal endpoint URLs by the static strategy.
const GOVERNANCE_ENGINE_SUFFIX: &str = "/governance-engine";

// ============================================================================
// SECTION: Credential Source
// ============================================================================

/// Configured origin of the bearer token and target endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum CredentialSource {
    /// Token read from session state; endpoint is a configured literal URL.
    Static {
        /// Base URL of the governance-engine endpoint, without the suffix.
        endpoint_url: String,
        /// Session-state attribute holding the bearer token.
        access_token_attribute: String,
    },
    /// Token issued for a named worker credential.
    Worker {
        /// Directory name of the worker credential.
        worker_name: String,
        /// Decision endpoint within the worker's environment.
        decision_endpoint_id: DecisionEndpointId,
    },
    /// Token issued for a shared environment configuration.
    Environment {
        /// Shared configuration naming the region and environment.
        settings: EnvironmentSettings,
        /// Decision endpoint within that environment.
        decision_endpoint_id: DecisionEndpointId,
    },
}

impl CredentialSource {
    /// Returns the provider-variant body key implied by this source.
    #[must_use]
    pub const fn body_key(&self) -> BodyKey {
        match self {
            Self::Static { .. } => BodyKey::Attributes,
            Self::Worker { .. } | Self::Environment { .. } => BodyKey::Parameters,
        }
    }
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Credential resolver executing the configured source strategy.
pub struct SourceCredentialResolver<W, E> {
    /// Configured credential source.
    source: CredentialSource,
    /// Host directory and token issuer for worker credentials.
    workers: W,
    /// Process-wide token utility for shared configurations.
    environments: E,
}

impl<W, E> SourceCredentialResolver<W, E>
where
    W: WorkerTokenSource,
    E: EnvironmentTokenSource,
{
    /// Creates a resolver for the configured source.
    #[must_use]
    pub const fn new(source: CredentialSource, workers: W, environments: E) -> Self {
        Self {
            source,
            workers,
            environments,
        }
    }

    /// Returns the configured credential source.
    #[must_use]
    pub const fn source(&self) -> &CredentialSource {
        &self.source
    }

    /// Resolves the static strategy from session state.
    fn resolve_static(
        state: &SessionState,
        endpoint_url: &str,
        access_token_attribute: &str,
    ) -> Result<Credential, CredentialError> {
        let token = state
            .get(access_token_attribute)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                CredentialError::MissingTokenAttribute(access_token_attribute.to_owned())
            })?;

        Ok(Credential {
            access_token: AccessToken::new(token),
            endpoint: format!("{}{GOVERNANCE_ENGINE_SUFFIX}", endpoint_url.trim_end_matches('/')),
            body_key: BodyKey::Attributes,
        })
    }

    /// Resolves the worker strategy through the worker directory.
    fn resolve_worker(
        &self,
        worker_name: &str,
        decision_endpoint_id: &DecisionEndpointId,
    ) -> Result<Credential, CredentialError> {
        let worker = self
            .workers
            .find_worker(worker_name)?
            .ok_or_else(|| CredentialError::WorkerNotFound(worker_name.to_owned()))?;
        let token = self
            .workers
            .access_token(&worker)?
            .ok_or_else(|| CredentialError::MissingToken(worker.name.clone()))?;
        let endpoint = format!(
            "{}/environments/{}/decisionEndpoints/{}",
            worker.api_url.trim_end_matches('/'),
            worker.environment_id,
            decision_endpoint_id
        );

        Ok(Credential {
            access_token: token,
            endpoint,
            body_key: BodyKey::Parameters,
        })
    }

    /// Resolves the shared-environment strategy through the token utility.
    fn resolve_environment(
        &self,
        settings: &EnvironmentSettings,
        decision_endpoint_id: &DecisionEndpointId,
    ) -> Result<Credential, CredentialError> {
        let token = self
            .environments
            .access_token(settings)?
            .ok_or_else(|| CredentialError::MissingToken(settings.name.clone()))?;
        let endpoint = format!(
            "{}/v1/environments/{}/decisionEndpoints/{}",
            settings.region.api_domain(),
            settings.environment_id,
            decision_endpoint_id
        );

        Ok(Credential {
            access_token: token,
            endpoint,
            body_key: BodyKey::Parameters,
        })
    }
}

impl<W, E> CredentialResolver for SourceCredentialResolver<W, E>
where
    W: WorkerTokenSource,
    E: EnvironmentTokenSource,
{
    fn resolve(&self, state: &SessionState) -> Result<Credential, CredentialError> {
        match &self.source {
            CredentialSource::Static {
                endpoint_url,
                access_token_attribute,
            } => Self::resolve_static(state, endpoint_url, access_token_attribute),
            CredentialSource::Worker {
                worker_name,
                decision_endpoint_id,
            } => self.resolve_worker(worker_name, decision_endpoint_id),
            CredentialSource::Environment {
                settings,
                decision_endpoint_id,
            } => self.resolve_environment(settings, decision_endpoint_id),
        }
    }
}

// ============================================================================
// SECTION: Null Token Sources
// ============================================================================

/// Token source for nodes that only use the static strategy.
///
/// Every lookup reports that no record or token exists, so a misconfigured
/// worker or environment source fails closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullTokenSource;

impl WorkerTokenSource for NullTokenSource {
    fn find_worker(&self, _name: &str) -> Result<Option<Worker>, CredentialError> {
        Ok(None)
    }

    fn access_token(&self, _worker: &Worker) -> Result<Option<AccessToken>, CredentialError> {
        Ok(None)
    }
}

impl EnvironmentTokenSource for NullTokenSource {
    fn access_token(
        &self,
        _settings: &EnvironmentSettings,
    ) -> Result<Option<AccessToken>, CredentialError> {
        Ok(None)
    }
}
