use async_trait::async_trait;

use crate::auth::application::domain::entities::{Avatar, UserId, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarOutcome {
    Image(Avatar),
    Placeholder(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAvatarError {
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetAvatarUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, role: UserRole)
        -> Result<AvatarOutcome, GetAvatarError>;
}
