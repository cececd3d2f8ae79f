//! Profile errors.

use thiserror::Error;

use crate::{api::ApiError, domain::profiles::models::PersonId};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("first name is required")]
    MissingFirstName,

    #[error("last name is required")]
    MissingLastName,

    #[error("profile {0} not found")]
    NotFound(PersonId),

    #[error("failed to load profile")]
    Load(#[source] ApiError),

    #[error("failed to update profile")]
    Update(#[source] ApiError),
}

impl ProfileError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingFirstName | Self::MissingLastName)
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFirstName => "Please enter a first name".to_string(),
            Self::MissingLastName => "Please enter a last name".to_string(),
            Self::NotFound(_) => "Profile not found".to_string(),
            Self::Load(_) => "Failed to load profile".to_string(),
            Self::Update(source) => source.backend_message().map_or_else(
                || "Failed to update profile".to_string(),
                |message| format!("Failed to update profile: {message}"),
            ),
        }
    }
}
