// crates/authorize-node-client/src/http.rs
// ============================================================================
// Module: HTTP Decision Client
// Description: Blocking client for the policy decision endpoint.
// Purpose: Send the bearer-authenticated decision POST with strict limits.
// Dependencies: authorize-node-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! The HTTP decision client issues one bounded POST per invocation: JSON
//! body nested under the provider body key, bearer/accept/content-type
//! headers, redirects disabled, timeouts and a response size cap enforced.
//! The send runs on a worker thread while the calling thread polls the
//! cancellation token, so host cancellation interrupts the wait without
//! retrying the request. Classification follows the flow's error taxonomy;
//! the client never chooses an outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::sync::mpsc;
use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::time::Duration;

use authorize_node_core::AccessToken;
use authorize_node_core::CancelToken;
use authorize_node_core::DecisionClient;
use authorize_node_core::DecisionError;
use authorize_node_core::DecisionRequest;
use authorize_node_core::DecisionResponse;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Interval between cancellation checks while a request is in flight.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Configuration for the HTTP decision client.
///
/// # Invariants
/// - `timeout_ms` bounds the full request lifecycle, so an abandoned
///   cancelled request always terminates.
/// - `max_response_bytes` is a hard upper bound on response bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Connection establishment timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Full request lifecycle timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 2_000,
            timeout_ms: 10_000,
            max_response_bytes: 1024 * 1024,
            user_agent: "authorize-node/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Client Implementation
// ============================================================================

/// Blocking decision endpoint client backed by a shared reqwest handle.
///
/// # Invariants
/// - Redirects are not followed.
/// - One underlying connection pool is built once and shared read-only
///   across concurrent invocations.
pub struct HttpDecisionClient {
    /// Client configuration, including limits.
    config: HttpClientConfig,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl HttpDecisionClient {
    /// Creates a new decision client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::Transport`] when the HTTP client cannot be
    /// created.
    pub fn new(config: HttpClientConfig) -> Result<Self, DecisionError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(|_| DecisionError::Transport("http client build failed".to_string()))?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Returns the active client configuration.
    #[must_use]
    pub const fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

impl DecisionClient for HttpDecisionClient {
    fn evaluate(
        &self,
        request: &DecisionRequest,
        cancel: &CancelToken,
    ) -> Result<DecisionResponse, DecisionError> {
        if cancel.is_cancelled() {
            return Err(DecisionError::Interrupted);
        }

        let headers = build_headers(&request.bearer_token)?;
        let body = encode_body(request)?;
        tracing::debug!(
            endpoint = %request.target_url,
            body_key = request.body_key.as_str(),
            "posting decision request"
        );

        let client = self.client.clone();
        let url = request.target_url.clone();
        let max_bytes = self.config.max_response_bytes;
        let (result_tx, result_rx) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("decision-request".to_string())
            .spawn(move || {
                let result = send_decision_request(&client, &url, headers, body, max_bytes);
                // The receiver may be gone if the call was cancelled.
                let _ = result_tx.send(result);
            })
            .map_err(|_| {
                DecisionError::Transport("decision request worker spawn failed".to_string())
            })?;
        drop(worker);

        loop {
            match result_rx.recv_timeout(CANCEL_POLL_INTERVAL) {
                Ok(result) => return result,
                Err(RecvTimeoutError::Timeout) => {
                    if cancel.is_cancelled() {
                        return Err(DecisionError::Interrupted);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(DecisionError::Transport(
                        "decision request worker terminated".to_string(),
                    ));
                }
            }
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the bearer, accept, and content-type headers.
fn build_headers(token: &AccessToken) -> Result<HeaderMap, DecisionError> {
    let mut headers = HeaderMap::new();
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
        .map_err(|_| DecisionError::Transport("invalid bearer token for header".to_string()))?;
    value.set_sensitive(true);
    headers.insert(reqwest::header::AUTHORIZATION, value);
    headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(reqwest::header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Encodes the request body as `{ bodyKey: payload }`.
fn encode_body(request: &DecisionRequest) -> Result<Vec<u8>, DecisionError> {
    let mut document = Map::new();
    document
        .insert(request.body_key.as_str().to_owned(), Value::Object(request.payload.clone()));
    serde_json::to_vec(&document)
        .map_err(|_| DecisionError::Transport("request body serialization failed".to_string()))
}

/// Sends the POST and classifies the response.
fn send_decision_request(
    client: &Client,
    url: &str,
    headers: HeaderMap,
    body: Vec<u8>,
    max_bytes: usize,
) -> Result<DecisionResponse, DecisionError> {
    let response = client
        .post(url)
        .headers(headers)
        .body(body)
        .send()
        .map_err(|error| DecisionError::Transport(error.to_string()))?;

    let status = response.status();
    let bytes = read_response_limited(response, max_bytes)?;
    match status {
        StatusCode::OK | StatusCode::CREATED => parse_response(&bytes),
        rejected => Err(DecisionError::RemoteRejection {
            status: rejected.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }),
    }
}

/// Parses the response body into a decision document.
fn parse_response(bytes: &[u8]) -> Result<DecisionResponse, DecisionError> {
    serde_json::from_slice::<DecisionResponse>(bytes)
        .map_err(|error| DecisionError::MalformedResponse(error.to_string()))
}

/// Reads the response body while enforcing a byte limit.
fn read_response_limited(response: Response, max_bytes: usize) -> Result<Vec<u8>, DecisionError> {
    let expected_len = response.content_length();
    let max_bytes_u64 = u64::try_from(max_bytes)
        .map_err(|_| DecisionError::Transport("response size limit exceeds u64".to_string()))?;
    if let Some(expected) = expected_len
        && expected > max_bytes_u64
    {
        return Err(DecisionError::Transport("response exceeds size limit".to_string()));
    }
    let mut buf = Vec::new();
    let limit = max_bytes_u64.saturating_add(1);
    let mut handle = response.take(limit);
    handle
        .read_to_end(&mut buf)
        .map_err(|_| DecisionError::Transport("failed to read response body".to_string()))?;
    if buf.len() > max_bytes {
        return Err(DecisionError::Transport("response exceeds size limit".to_string()));
    }
    Ok(buf)
}
