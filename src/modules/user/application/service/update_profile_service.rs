use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::user::application::domain::entities::{normalize_name, normalize_skills, ProfileView};
use crate::user::application::domain::policies::avatar_policy::AvatarPolicy;
use crate::user::application::ports::incoming::use_cases::{
    ProfileUpdate, UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::user::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};

pub struct UpdateProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
    avatar_policy: AvatarPolicy,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R, avatar_policy: AvatarPolicy) -> Self {
        Self {
            repository,
            avatar_policy,
        }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, input: UpdateProfileInput) -> Result<ProfileView, UpdateProfileError> {
        let requester_id = input.requester.user_id();

        if input.user_id != requester_id {
            warn!(
                requester_id = %requester_id,
                target_id = %input.user_id,
                "Profile update for another user rejected"
            );
            return Err(UpdateProfileError::Forbidden);
        }

        if input.update.role() != input.requester.role() {
            return Err(UpdateProfileError::RoleMismatch);
        }

        let (name, bio, skills) = match input.update {
            ProfileUpdate::Mentor { name, bio, skills } => {
                (name, bio, Some(normalize_skills(&skills)))
            }
            ProfileUpdate::Mentee { name, bio } => (name, bio, None),
        };

        let name = normalize_name(&name).map_err(UpdateProfileError::InvalidName)?;

        let avatar = match input.image.as_deref().map(str::trim) {
            Some(encoded) if !encoded.is_empty() => Some(
                self.avatar_policy
                    .decode(encoded)
                    .map_err(|e| UpdateProfileError::InvalidImage(e.to_string()))?,
            ),
            _ => None,
        };

        let data = UpdateProfileData {
            user_id: requester_id,
            name,
            bio,
            skills,
            avatar,
        };

        match self.repository.update_profile(data).await {
            Ok(view) => {
                info!(user_id = %requester_id, "Profile updated");
                Ok(view)
            }
            Err(ProfileRepositoryError::NotFound) => Err(UpdateProfileError::NotFound),
            Err(ProfileRepositoryError::DatabaseError(msg)) => {
                error!(user_id = %requester_id, error = %msg, "Profile update failed");
                Err(UpdateProfileError::RepositoryError(msg))
            }
        }
    }
}
