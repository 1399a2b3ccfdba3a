// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserRole};

/// What login needs to know about an account.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt user row: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, UserQueryError>;
}
