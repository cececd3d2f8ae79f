//! Customer, seller and owner endpoints.
//!
//! The three roles share one resource shape under different collections, so
//! each operation takes the role instead of being repeated three times.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;

use crate::{
    api::{client::HttpStoreApi, errors::ApiError},
    domain::profiles::models::{PersonId, Profile, ProfileUpdate, Registration},
    session::UserType,
};

#[automock]
#[async_trait]
pub trait ProfilesApi: Send + Sync {
    /// Every account of a role.
    async fn list_profiles(&self, role: UserType) -> Result<Vec<Profile>, ApiError>;

    /// Retrieve a single account.
    async fn get_profile(&self, role: UserType, id: PersonId) -> Result<Profile, ApiError>;

    /// Create an account in the collection named by the registration's role.
    async fn create_profile(&self, registration: Registration) -> Result<Profile, ApiError>;

    /// Replace the editable fields of an account.
    async fn update_profile(
        &self,
        role: UserType,
        id: PersonId,
        update: ProfileUpdate,
    ) -> Result<Profile, ApiError>;

    /// Delete an account.
    async fn delete_profile(&self, role: UserType, id: PersonId) -> Result<(), ApiError>;
}

fn collection_path(role: UserType) -> String {
    format!("/api/{}", role.collection())
}

fn profile_path(role: UserType, id: PersonId) -> String {
    format!("/api/{}/{id}", role.collection())
}

#[async_trait]
impl ProfilesApi for HttpStoreApi {
    async fn list_profiles(&self, role: UserType) -> Result<Vec<Profile>, ApiError> {
        self.fetch(self.request(Method::GET, &collection_path(role)))
            .await
    }

    async fn get_profile(&self, role: UserType, id: PersonId) -> Result<Profile, ApiError> {
        self.fetch(self.request(Method::GET, &profile_path(role, id)))
            .await
    }

    async fn create_profile(&self, registration: Registration) -> Result<Profile, ApiError> {
        self.fetch(
            self.request(Method::POST, &collection_path(registration.user_type))
                .json(&registration),
        )
        .await
    }

    async fn update_profile(
        &self,
        role: UserType,
        id: PersonId,
        update: ProfileUpdate,
    ) -> Result<Profile, ApiError> {
        self.fetch(
            self.request(Method::PUT, &profile_path(role, id))
                .json(&update),
        )
        .await
    }

    async fn delete_profile(&self, role: UserType, id: PersonId) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &profile_path(role, id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_has_its_own_collection() {
        assert_eq!(collection_path(UserType::Seller), "/api/sellers");
        assert_eq!(
            profile_path(UserType::Owner, PersonId::new(3)),
            "/api/owners/3"
        );
    }
}
