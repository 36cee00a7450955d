//! Upstream API configuration.
//!
//! Built once at process start and passed into [`crate::executor::UpstreamClient`];
//! request-handling code never reads ambient/global state.

use std::time::Duration;

/// Fixed upstream host. Not configurable; it doubles as the
/// `x-rapidapi-host` identification header.
pub const DEFAULT_HOST: &str = "linkedin-bulk-data-scraper.p.rapidapi.com";

/// Default `x-rapidapi-user` identifier sent when none is configured.
pub const DEFAULT_API_USER: &str = "usama";

/// Per-attempt connect/overall timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Total physical attempts per request (first try + retries).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Base backoff delay; the sleep before attempt N+1 is `base_delay * N`.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL requests are issued against.
    pub base_url: String,
    /// Value of the `x-rapidapi-host` header.
    pub host: String,
    /// Value of the `x-rapidapi-key` header. Secret: must never appear in
    /// logs or envelopes (see [`crate::redact`]).
    pub api_key: String,
    /// Value of the `x-rapidapi-user` header.
    pub api_user: String,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl UpstreamConfig {
    /// Production configuration against the fixed upstream host.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_user: impl Into<String>) -> Self {
        Self {
            base_url: format!("https://{DEFAULT_HOST}"),
            host: DEFAULT_HOST.to_string(),
            api_key: api_key.into(),
            api_user: api_user.into(),
            timeout: DEFAULT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}
