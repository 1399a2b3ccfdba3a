use async_trait::async_trait;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::CreatedUser;

#[derive(Debug, Clone)]
pub struct SignupInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignupError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidName(String),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SignupUserUseCase: Send + Sync {
    async fn execute(&self, input: SignupInput) -> Result<CreatedUser, SignupError>;
}
