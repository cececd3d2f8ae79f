//! HTTP client for the storefront backend.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    api::{config::ApiConfig, errors::ApiError},
    session::SessionStore,
};

/// `reqwest` backed implementation of every backend API trait.
///
/// Requests carry the session's bearer token when one is stored.
#[derive(Debug, Clone)]
pub struct HttpStoreApi {
    config: ApiConfig,
    http: Client,
    session: Arc<dyn SessionStore>,
}

impl HttpStoreApi {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.request_timeout)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            config,
            http,
            session,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);

        debug!(%method, %url, "backend request");

        let builder = self.http.request(method, url);

        match self.session.get() {
            Ok(Some(identity)) => builder.bearer_auth(identity.token.expose()),
            Ok(None) => builder,
            Err(source) => {
                warn!("failed to read session, sending request without token: {source}");

                builder
            }
        }
    }

    /// Send a request and parse a JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = Self::check(request.send().await?).await?;

        Ok(response.json().await?)
    }

    /// Send a request whose response body is irrelevant.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<(), ApiError> {
        Self::check(request.send().await?).await?;

        Ok(())
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        Err(ApiError::from_status(status, &body))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use crate::{
        api::CartsApi,
        domain::profiles::models::PersonId,
        session::{MemorySessionStore, SessionIdentity, SessionToken, UserType},
        test::backend::spawn_backend,
    };

    use super::*;

    fn client(session: MemorySessionStore) -> Result<HttpStoreApi, ApiError> {
        HttpStoreApi::new(ApiConfig::new("http://shop.test/"), Arc::new(session))
    }

    #[test]
    fn request_attaches_bearer_token() -> TestResult {
        let api = client(MemorySessionStore::with_identity(SessionIdentity {
            token: SessionToken::new("abc123"),
            user_type: UserType::Customer,
            user_id: PersonId::new(5),
            email: "grace@example.com".to_string(),
            display_name: "Grace Customer".to_string(),
        }))?;

        let request = api.request(Method::GET, "/api/customers/5/cart").build()?;

        assert_eq!(request.url().as_str(), "http://shop.test/api/customers/5/cart");
        assert_eq!(
            request
                .headers()
                .get(reqwest::header::AUTHORIZATION)
                .map(|value| value.to_str())
                .transpose()?,
            Some("Bearer abc123")
        );

        Ok(())
    }

    #[test]
    fn request_without_session_has_no_authorization() -> TestResult {
        let api = client(MemorySessionStore::new())?;

        let request = api.request(Method::DELETE, "api/customers/5/cart").build()?;

        assert_eq!(request.method(), &Method::DELETE);
        assert!(
            request
                .headers()
                .get(reqwest::header::AUTHORIZATION)
                .is_none()
        );

        Ok(())
    }

    #[tokio::test]
    async fn silent_backend_times_out() -> TestResult {
        let base_url = spawn_backend(|_| None).await?;

        let mut config = ApiConfig::new(base_url);
        config.request_timeout = Duration::from_millis(50);

        let api = HttpStoreApi::new(config, Arc::new(MemorySessionStore::new()))?;

        let result = api.get_cart(PersonId::new(5)).await;

        assert!(
            matches!(result, Err(ApiError::Timeout)),
            "expected a timeout, got {result:?}"
        );

        Ok(())
    }
}
