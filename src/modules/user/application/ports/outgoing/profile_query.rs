use async_trait::async_trait;

use crate::auth::application::domain::entities::{Avatar, UserId, UserRole};
use crate::user::application::domain::entities::ProfileView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored user record is invalid: {0}")]
    CorruptRecord(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarRecord {
    /// No user with that id holds that role.
    UserNotFound,
    NoAvatar,
    Found(Avatar),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_profile(&self, user_id: UserId) -> Result<Option<ProfileView>, ProfileQueryError>;

    async fn find_avatar(
        &self,
        user_id: UserId,
        role: UserRole,
    ) -> Result<AvatarRecord, ProfileQueryError>;
}
