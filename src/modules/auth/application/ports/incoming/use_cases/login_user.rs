use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserRole};

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub token: String,
    pub user_id: UserId,
    pub role: UserRole,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password look the same to the caller.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, LoginError>;
}
