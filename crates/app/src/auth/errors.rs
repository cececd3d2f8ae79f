//! Auth service errors.

use thiserror::Error;

use crate::{
    api::ApiError,
    session::{SessionError, UserType},
};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email and password are required")]
    MissingCredentials,

    #[error("first and last name are required")]
    MissingName,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("not logged in")]
    NotLoggedIn,

    #[error("logged in as {0}, not as a customer")]
    NotCustomer(UserType),

    #[error("logged in as {actual}, this needs a {required} account")]
    WrongRole { required: UserType, actual: UserType },

    #[error("registration failed")]
    Register(#[source] ApiError),

    #[error("login failed")]
    Login(#[source] ApiError),

    #[error("session storage error")]
    Session(#[from] SessionError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredentials => "Please enter your email and password".to_string(),
            Self::MissingName => "Please enter your first and last name".to_string(),
            Self::InvalidCredentials => "Invalid email or password".to_string(),
            Self::NotLoggedIn => "Please log in first".to_string(),
            Self::NotCustomer(_) => "Only customers have a cart".to_string(),
            Self::WrongRole { required, .. } => format!("Please log in as a {required}"),
            Self::Register(source) => source.backend_message().map_or_else(
                || "Registration failed".to_string(),
                |message| format!("Registration failed: {message}"),
            ),
            Self::Login(_) => "Login failed".to_string(),
            Self::Session(_) => "Could not access the saved session".to_string(),
        }
    }
}
