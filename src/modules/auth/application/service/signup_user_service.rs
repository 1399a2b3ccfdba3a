use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::incoming::use_cases::{
    SignupError, SignupInput, SignupUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, CreatedUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

const MAX_NAME_LEN: usize = 100;

pub struct SignupUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> SignupUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
            password_policy,
        }
    }

    fn normalize_email(email: &str) -> Result<String, SignupError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(SignupError::InvalidEmail("Email cannot be empty".to_string()));
        }

        if !EmailAddress::is_valid(email) {
            return Err(SignupError::InvalidEmail("Invalid email format".to_string()));
        }

        Ok(email.to_lowercase())
    }

    fn normalize_name(name: &str) -> Result<String, SignupError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(SignupError::InvalidName("Name is required".to_string()));
        }

        if name.chars().count() > MAX_NAME_LEN {
            return Err(SignupError::InvalidName(format!(
                "Name must be at most {} characters",
                MAX_NAME_LEN
            )));
        }

        Ok(name.to_string())
    }
}

#[async_trait]
impl<Q, R> SignupUserUseCase for SignupUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: SignupInput) -> Result<CreatedUser, SignupError> {
        let email = Self::normalize_email(&input.email)?;
        let name = Self::normalize_name(&input.name)?;

        self.password_policy
            .validate(&input.password)
            .map_err(|e| SignupError::InvalidPassword(e.to_string()))?;

        let existing = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| SignupError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            warn!(email = %email, "Signup rejected: email already registered");
            return Err(SignupError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| SignupError::HashingFailed(e.to_string()))?;

        let created = self
            .user_repository
            .create_user(CreateUserData {
                email,
                password_hash,
                role: input.role,
                name,
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent signup for the same email
                UserRepositoryError::EmailAlreadyExists => SignupError::EmailAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => SignupError::RepositoryError(msg),
            })?;

        info!(user_id = %created.id, role = %created.role, "User created");

        Ok(created)
    }
}
