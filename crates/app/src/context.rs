//! App Context

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{
    api::{ApiConfig, ApiError, HealthApi, HttpStoreApi, ProfilesApi},
    auth::AuthService,
    domain::{
        carts::CartController, checkout::CheckoutController, orders::OrderHistory,
        products::Catalog, profiles::ProfileEditor,
    },
    session::{SessionStore, UserType},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build backend client")]
    Client(#[source] ApiError),
}

/// Everything a front end needs, wired against one backend.
#[derive(Clone)]
pub struct AppContext {
    pub session: Arc<dyn SessionStore>,
    pub health: Arc<dyn HealthApi>,
    pub auth: Arc<AuthService>,
    pub cart: Arc<CartController>,
    pub checkout: Arc<CheckoutController>,
    pub orders: Arc<OrderHistory>,
    pub catalog: Arc<Catalog>,
    profiles: Arc<dyn ProfilesApi>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("session", &self.session)
            .field("cart", &self.cart)
            .field("checkout", &self.checkout)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context for the backend at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self, AppInitError> {
        let api = Arc::new(HttpStoreApi::new(config, session.clone()).map_err(AppInitError::Client)?);

        Ok(Self {
            health: api.clone(),
            auth: Arc::new(AuthService::new(api.clone(), api.clone(), session.clone())),
            cart: Arc::new(CartController::new(api.clone())),
            checkout: Arc::new(CheckoutController::new(api.clone(), api.clone())),
            orders: Arc::new(OrderHistory::new(api.clone())),
            catalog: Arc::new(Catalog::new(api.clone())),
            profiles: api,
            session,
        })
    }

    /// Profile editor for the given role.
    pub fn profile_editor(&self, role: UserType) -> ProfileEditor {
        ProfileEditor::new(self.profiles.clone(), role)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::session::MemorySessionStore;

    use super::*;

    #[test]
    fn context_starts_without_state() -> TestResult {
        let context = AppContext::new(ApiConfig::default(), Arc::new(MemorySessionStore::new()))?;

        assert_eq!(context.cart.cart(), None);
        assert_eq!(context.checkout.state().name(), "loading");
        assert_eq!(context.profile_editor(UserType::Owner).role(), UserType::Owner);
        assert_eq!(context.auth.current()?, None);

        Ok(())
    }
}
