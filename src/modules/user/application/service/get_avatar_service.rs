use async_trait::async_trait;
use tracing::error;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::user::application::domain::policies::avatar_policy::AvatarPolicy;
use crate::user::application::ports::incoming::use_cases::{
    AvatarOutcome, GetAvatarError, GetAvatarUseCase,
};
use crate::user::application::ports::outgoing::{AvatarRecord, ProfileQuery};

pub struct GetAvatarService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
    policy: AvatarPolicy,
}

impl<Q> GetAvatarService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q, policy: AvatarPolicy) -> Self {
        Self { query, policy }
    }
}

#[async_trait]
impl<Q> GetAvatarUseCase for GetAvatarService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        role: UserRole,
    ) -> Result<AvatarOutcome, GetAvatarError> {
        let record = self.query.find_avatar(user_id, role).await.map_err(|e| {
            error!(user_id = %user_id, error = %e, "Failed to load avatar");
            GetAvatarError::QueryError(e.to_string())
        })?;

        match record {
            AvatarRecord::Found(avatar) => Ok(AvatarOutcome::Image(avatar)),
            AvatarRecord::NoAvatar => Ok(AvatarOutcome::Placeholder(
                self.policy.placeholder_for(role),
            )),
            AvatarRecord::UserNotFound => Err(GetAvatarError::NotFound),
        }
    }
}
