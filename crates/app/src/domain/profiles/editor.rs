//! Profile editor shared by every role.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::{
    api::ProfilesApi,
    domain::profiles::{
        errors::ProfileError,
        models::{PersonId, Profile, ProfileUpdate},
    },
    session::UserType,
};

/// Fetch and edit the profile of a customer, seller or owner.
pub struct ProfileEditor {
    api: Arc<dyn ProfilesApi>,
    role: UserType,
    profile: RwLock<Option<Profile>>,
}

impl fmt::Debug for ProfileEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileEditor")
            .field("role", &self.role)
            .field("profile", &*self.profile.read())
            .finish_non_exhaustive()
    }
}

impl ProfileEditor {
    pub fn new(api: Arc<dyn ProfilesApi>, role: UserType) -> Self {
        Self {
            api,
            role,
            profile: RwLock::new(None),
        }
    }

    pub fn role(&self) -> UserType {
        self.role
    }

    pub fn profile(&self) -> Option<Profile> {
        self.profile.read().clone()
    }

    /// # Errors
    ///
    /// Returns [`ProfileError::NotFound`] for an unknown id and
    /// [`ProfileError::Load`] for any other failure.
    pub async fn load(&self, id: PersonId) -> Result<Profile, ProfileError> {
        let profile = self.api.get_profile(self.role, id).await.map_err(|source| {
            if source.is_not_found() {
                ProfileError::NotFound(id)
            } else {
                warn!(role = %self.role, %id, "failed to load profile: {source}");

                ProfileError::Load(source)
            }
        })?;

        debug!(role = %self.role, %id, "profile loaded");

        *self.profile.write() = Some(profile.clone());

        Ok(profile)
    }

    /// Save changes. Names are trimmed and must not be blank.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any request for a blank name, and
    /// [`ProfileError::Update`] when the backend refuses.
    pub async fn update(
        &self,
        id: PersonId,
        update: ProfileUpdate,
    ) -> Result<Profile, ProfileError> {
        let update = validate(update)?;

        let profile = self
            .api
            .update_profile(self.role, id, update)
            .await
            .map_err(|source| {
                warn!(role = %self.role, %id, status = ?source.status(), "profile update failed: {source}");

                ProfileError::Update(source)
            })?;

        info!(role = %self.role, %id, "profile updated");

        *self.profile.write() = Some(profile.clone());

        Ok(profile)
    }
}

fn validate(update: ProfileUpdate) -> Result<ProfileUpdate, ProfileError> {
    let first_name = update.first_name.trim().to_string();
    let last_name = update.last_name.trim().to_string();

    if first_name.is_empty() {
        return Err(ProfileError::MissingFirstName);
    }

    if last_name.is_empty() {
        return Err(ProfileError::MissingLastName);
    }

    Ok(ProfileUpdate {
        first_name,
        last_name,
        ..update
    })
}
