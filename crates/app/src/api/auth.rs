//! Login endpoint.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;

use crate::{
    api::{client::HttpStoreApi, errors::ApiError},
    auth::models::{Credentials, LoginResponse},
};

#[automock]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token. Verification happens on the
    /// backend.
    async fn login(&self, credentials: Credentials) -> Result<LoginResponse, ApiError>;
}

#[async_trait]
impl AuthApi for HttpStoreApi {
    async fn login(&self, credentials: Credentials) -> Result<LoginResponse, ApiError> {
        self.fetch(
            self.request(Method::POST, "/api/auth/login")
                .json(&credentials),
        )
        .await
    }
}
