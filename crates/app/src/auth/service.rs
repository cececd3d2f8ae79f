//! Auth service.

use std::{fmt, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    api::{ApiError, AuthApi, ProfilesApi},
    auth::{errors::AuthError, models::Credentials},
    domain::profiles::models::{PersonId, Registration},
    session::{SessionIdentity, SessionStore, UserType},
};

pub struct AuthService {
    auth: Arc<dyn AuthApi>,
    profiles: Arc<dyn ProfilesApi>,
    session: Arc<dyn SessionStore>,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(
        auth: Arc<dyn AuthApi>,
        profiles: Arc<dyn ProfilesApi>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            auth,
            profiles,
            session,
        }
    }

    /// Log in and remember the identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] before any request when
    /// either field is blank, [`AuthError::InvalidCredentials`] when the
    /// backend refuses them, and [`AuthError::Login`] for other failures.
    pub async fn login(&self, credentials: Credentials) -> Result<SessionIdentity, AuthError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let email = credentials.email.trim().to_string();

        let response = self
            .auth
            .login(Credentials::new(email.clone(), credentials.password.clone()))
            .await
            .map_err(|source| login_failure(&email, source))?;

        let identity = SessionIdentity::from(response);

        self.session.set(identity.clone())?;

        info!(user = %identity.user_id, role = %identity.user_type, "logged in");

        Ok(identity)
    }

    /// Create an account, then log into it.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any request when a required field
    /// is blank, [`AuthError::Register`] when the account cannot be created,
    /// and any [`AuthService::login`] error afterwards.
    pub async fn register(&self, registration: Registration) -> Result<SessionIdentity, AuthError> {
        if registration.first_name.trim().is_empty() || registration.last_name.trim().is_empty() {
            return Err(AuthError::MissingName);
        }

        if registration.email.trim().is_empty() || registration.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let credentials = Credentials::new(registration.email.trim(), registration.password.clone());
        let role = registration.user_type;

        let profile = self
            .profiles
            .create_profile(registration)
            .await
            .map_err(|source| {
                warn!(%role, status = ?source.status(), "registration failed: {source}");

                AuthError::Register(source)
            })?;

        info!(%role, user = %profile.person_id, "account registered");

        self.login(credentials).await
    }

    /// Forget the saved session. Logging out twice is fine.
    ///
    /// # Errors
    ///
    /// Returns an error when the session storage cannot be cleared.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.clear()?;

        debug!("logged out");

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error when the session storage cannot be read.
    pub fn current(&self) -> Result<Option<SessionIdentity>, AuthError> {
        Ok(self.session.get()?)
    }

    /// The logged-in customer's id.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotLoggedIn`] without a session and
    /// [`AuthError::NotCustomer`] for sellers and owners.
    pub fn require_customer(&self) -> Result<PersonId, AuthError> {
        let identity = self.current()?.ok_or(AuthError::NotLoggedIn)?;

        identity
            .customer_id()
            .ok_or(AuthError::NotCustomer(identity.user_type))
    }

    /// The logged-in user's id, when they hold `role`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotLoggedIn`] without a session and
    /// [`AuthError::WrongRole`] for any other role.
    pub fn require_role(&self, role: UserType) -> Result<PersonId, AuthError> {
        let identity = self.require_identity()?;

        if identity.user_type == role {
            Ok(identity.user_id)
        } else {
            Err(AuthError::WrongRole {
                required: role,
                actual: identity.user_type,
            })
        }
    }

    /// # Errors
    ///
    /// Returns [`AuthError::NotLoggedIn`] without a session.
    pub fn require_identity(&self) -> Result<SessionIdentity, AuthError> {
        self.current()?.ok_or(AuthError::NotLoggedIn)
    }
}

fn login_failure(email: &str, source: ApiError) -> AuthError {
    match source.status() {
        Some(400 | 401 | 403 | 404) => {
            warn!(%email, "login refused: {source}");

            AuthError::InvalidCredentials
        }
        _ => {
            warn!(%email, "login failed: {source}");

            AuthError::Login(source)
        }
    }
}
