//! Backend Config

use std::time::Duration;

use clap::Args;
use storefront_app::api::{ApiConfig, config::DEFAULT_BASE_URL};

/// Backend connection settings.
#[derive(Debug, Args)]
pub(crate) struct ApiArgs {
    /// Backend base URL
    #[arg(long, env = "STOREFRONT_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Timeout for each backend request, in seconds
    #[arg(long, env = "STOREFRONT_REQUEST_TIMEOUT_SECONDS", default_value_t = 5u64)]
    pub request_timeout_seconds: u64,

    /// Timeout for the health probe, in seconds
    #[arg(long, env = "STOREFRONT_HEALTH_TIMEOUT_SECONDS", default_value_t = 2u64)]
    pub health_timeout_seconds: u64,
}

impl ApiArgs {
    pub(crate) fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_seconds),
            health_timeout: Duration::from_secs(self.health_timeout_seconds),
        }
    }
}
