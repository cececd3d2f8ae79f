//! Backend health probe.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::{client::HttpStoreApi, errors::ApiError};

/// Status reported when only the fallback endpoint answers.
pub const FALLBACK_STATUS: &str = "UP";

/// Health response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Backend status, `UP` when healthy.
    pub status: String,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case(FALLBACK_STATUS)
    }
}

#[automock]
#[async_trait]
pub trait HealthApi: Send + Sync {
    /// Ask the actuator endpoint; fall back to the site root.
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

#[async_trait]
impl HealthApi for HttpStoreApi {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let timeout = self.config().health_timeout;

        let actuator = self
            .fetch::<HealthStatus>(
                self.request(Method::GET, "/actuator/health")
                    .timeout(timeout),
            )
            .await;

        match actuator {
            Ok(status) => Ok(status),
            Err(source) => {
                warn!("actuator health check failed, probing root: {source}");

                self.execute(self.request(Method::GET, "/").timeout(timeout))
                    .await?;

                debug!("backend root answered");

                Ok(HealthStatus {
                    status: FALLBACK_STATUS.to_string(),
                })
            }
        }
    }
}
