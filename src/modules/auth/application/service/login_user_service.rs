use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    LoginError, LoginInput, LoginOutput, LoginUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, TokenSubject, UserQuery,
};

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, LoginError> {
        let email = input.email.trim().to_lowercase();

        let user = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = match self
            .password_hasher
            .verify_password(&input.password, &user.password_hash)
            .await
        {
            Ok(matches) => matches,
            Err(e) => {
                // Unreadable stored hash: treat as a mismatch, never as a login
                error!(user_id = %user.id, error = %e, "Stored password hash could not be verified");
                false
            }
        };

        if !matches {
            warn!(user_id = %user.id, "Login failed: password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .issue_access_token(&TokenSubject {
                user_id: user.id,
                role: user.role,
                name: user.name.clone(),
                email: user.email.clone(),
            })
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginOutput {
            token,
            user_id: user.id,
            role: user.role,
        })
    }
}
