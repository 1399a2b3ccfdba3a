use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::ProfileView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMyProfileError {
    /// Token is valid but the account row is gone.
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetMyProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<ProfileView, GetMyProfileError>;
}
