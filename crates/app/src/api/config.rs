//! REST client configuration.

use std::time::Duration;

/// Backend address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default timeout for cart, checkout and every other backend call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Default connect and response timeout for the health probe.
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

/// Configuration for connecting to the storefront backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend base address, e.g. `"http://localhost:8080"`.
    pub base_url: String,

    /// Upper bound for a single request, connect to last byte.
    pub request_timeout: Duration,

    /// Upper bound for the health probe.
    pub health_timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        }
    }

    /// Join a path onto the base address.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
