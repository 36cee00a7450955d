//! The retrying request executor.
//!
//! One call = up to `max_attempts` physical HTTP attempts. Transport-level
//! failures (connect, DNS, timeout, body read) are retried with linear
//! backoff; once an HTTP response is received its status is final and is
//! classified into an [`Envelope`] without further retries.

use crate::config::UpstreamConfig;
use crate::envelope::Envelope;
use crate::redact::{sanitize_reqwest_error, truncate_for_log};
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

const HOST_HEADER: &str = "x-rapidapi-host";
const KEY_HEADER: &str = "x-rapidapi-key";
const USER_HEADER: &str = "x-rapidapi-user";

const PAYLOAD_LOG_CHARS: usize = 200;

/// Transport-level attempt failure. Already sanitized: safe to log and to
/// embed in envelope details.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl RequestMethod {
    fn as_http(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// One upstream call. Immutable; constructed per call, never persisted.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: RequestMethod,
    /// Fixed upstream path. Never caller-supplied.
    pub endpoint: &'static str,
    /// Pre-serialized JSON body.
    pub payload: Option<String>,
}

/// Stateless executor for upstream calls.
///
/// Cheap to clone and safe to share across tasks; it holds nothing but the
/// configuration. Connections are never reused across attempts or calls.
#[derive(Clone)]
pub struct UpstreamClient {
    config: Arc<UpstreamConfig>,
}

impl UpstreamClient {
    #[must_use]
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Execute one upstream call, retrying transport failures.
    ///
    /// Never fails: every outcome is normalized into an [`Envelope`].
    pub async fn execute(&self, request: &UpstreamRequest) -> Envelope {
        info!(
            method = %request.method,
            endpoint = request.endpoint,
            "upstream request"
        );
        debug!(
            host = %self.config.host,
            user = %self.config.api_user,
            "upstream request headers (key redacted)"
        );
        if let Some(payload) = &request.payload {
            debug!(
                payload = %truncate_for_log(payload, PAYLOAD_LOG_CHARS),
                "upstream request payload"
            );
        }

        let max = self.config.max_attempts.max(1);
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.attempt(request).await {
                Ok(envelope) => return envelope,
                Err(err) if attempt < max => {
                    warn!(
                        method = %request.method,
                        endpoint = request.endpoint,
                        attempt,
                        error = %err,
                        "upstream attempt failed; retrying"
                    );
                    tokio::time::sleep(self.config.base_delay * attempt).await;
                }
                Err(err) => {
                    warn!(
                        method = %request.method,
                        endpoint = request.endpoint,
                        attempt,
                        error = %err,
                        "upstream attempt failed; giving up"
                    );
                    return Envelope::failure_with_details(
                        500,
                        format!("Request failed after {max} attempts"),
                        json!({ "error": err.to_string() }),
                    );
                }
            }
        }
    }

    /// One physical HTTP attempt.
    ///
    /// A fresh client is built per attempt and dropped on every exit path,
    /// so the connection is released whether the attempt succeeds, fails to
    /// parse, or errors before a response is read.
    async fn attempt(&self, request: &UpstreamRequest) -> Result<Envelope, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(self.config.timeout)
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| TransportError(sanitize_reqwest_error(&e)))?;

        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            request.endpoint
        );

        let mut req = client
            .request(request.method.as_http(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(HOST_HEADER, &self.config.host)
            .header(KEY_HEADER, &self.config.api_key)
            .header(USER_HEADER, &self.config.api_user);
        if let Some(payload) = &request.payload {
            req = req.body(payload.clone());
        }

        let response = req
            .send()
            .await
            .map_err(|e| TransportError(sanitize_reqwest_error(&e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(sanitize_reqwest_error(&e)))?;

        info!(
            method = %request.method,
            endpoint = request.endpoint,
            status,
            "upstream response"
        );

        Ok(classify_response(status, &body))
    }
}

/// Classify a received HTTP response. Statuses are final here: an upstream
/// error status is surfaced, not retried.
fn classify_response(status: u16, body: &str) -> Envelope {
    if body.is_empty() {
        return Envelope::failure(status, "Empty response from upstream API");
    }

    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => {
            if status >= 400 {
                let message = parsed
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown upstream error")
                    .to_string();
                Envelope::failure_with_details(status, message, parsed)
            } else {
                Envelope::success(status, parsed)
            }
        }
        Err(e) => Envelope::failure_with_details(
            status,
            "Failed to decode JSON response",
            json!({ "error": e.to_string(), "raw_body": body }),
        ),
    }
}
