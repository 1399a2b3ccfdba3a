use async_trait::async_trait;

use crate::auth::application::domain::entities::{Avatar, UserId};
use crate::user::application::domain::entities::ProfileView;

#[derive(Debug, Clone)]
pub struct UpdateProfileData {
    pub user_id: UserId,
    pub name: String,
    pub bio: String,
    /// `None` leaves the stored skills untouched (mentees).
    pub skills: Option<Vec<String>>,
    /// `None` keeps the current avatar.
    pub avatar: Option<Avatar>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn update_profile(
        &self,
        data: UpdateProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError>;
}
