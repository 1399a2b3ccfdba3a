use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserRole};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CreatedUser {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<CreatedUser, UserRepositoryError>;
}
