use crate::models::user::{ProfileUpdate, User, PROFILE_ID};
use crate::repositories::user_repository::{RepositoryError, UserRepository};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error("User not found")]
    UserNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

/// Reads and overwrites the singleton profile.
///
/// Two update entry points exist with different failure contracts:
/// [`ProfileService::update_profile`] surfaces every failure to the caller,
/// while [`ProfileService::submit_profile_form`] skips absent profiles and
/// logs persistence failures without returning them.
pub struct ProfileService {
    repository: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_profile(&self) -> Result<Option<User>, ProfileServiceError> {
        Ok(self.repository.find_by_id(PROFILE_ID).await?)
    }

    pub async fn get_profile(&self) -> Result<User, ProfileServiceError> {
        self.find_profile()
            .await?
            .ok_or(ProfileServiceError::UserNotFound)
    }

    /// Overwrites name, email and phone of the profile in one write.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ProfileServiceError> {
        let user = self.get_profile().await?;

        match self.repository.update_profile(user.id, &update).await {
            Ok(()) => Ok(user.with_update(&update)),
            Err(RepositoryError::NotFound) => Err(ProfileServiceError::UserNotFound),
            Err(e) => Err(ProfileServiceError::RepositoryError(e)),
        }
    }

    /// Form submission path.
    ///
    /// Returns `None` without writing when no profile exists. A failed write is
    /// logged and the submitted values are still returned for display.
    pub async fn submit_profile_form(
        &self,
        update: ProfileUpdate,
    ) -> Result<Option<User>, ProfileServiceError> {
        let Some(user) = self.find_profile().await? else {
            tracing::debug!("No profile row present, skipping form update");
            return Ok(None);
        };

        if let Err(e) = self.repository.update_profile(user.id, &update).await {
            tracing::error!("Error saving profile: {}", e);
        }

        Ok(Some(user.with_update(&update)))
    }
}
