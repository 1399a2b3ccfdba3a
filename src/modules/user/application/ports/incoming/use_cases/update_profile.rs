use async_trait::async_trait;

use crate::auth::application::domain::entities::{Actor, UserId, UserRole};
use crate::user::application::domain::entities::ProfileView;

/// Submitted profile, discriminated by the role it claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUpdate {
    Mentor {
        name: String,
        bio: String,
        skills: Vec<String>,
    },
    Mentee {
        name: String,
        bio: String,
    },
}

impl ProfileUpdate {
    pub fn role(&self) -> UserRole {
        match self {
            ProfileUpdate::Mentor { .. } => UserRole::Mentor,
            ProfileUpdate::Mentee { .. } => UserRole::Mentee,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    pub requester: Actor,
    pub user_id: UserId,
    pub update: ProfileUpdate,
    /// Base64 image; `None` or empty keeps the stored avatar.
    pub image: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Cannot update another user's profile")]
    Forbidden,

    #[error("Role cannot be changed")]
    RoleMismatch,

    #[error("{0}")]
    InvalidName(String),

    #[error("{0}")]
    InvalidImage(String),

    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, input: UpdateProfileInput) -> Result<ProfileView, UpdateProfileError>;
}
