use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::{TokenProvider, TokenSubject};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: JwtConfig::DEFAULT_ISSUER.to_string(),
        audience: JwtConfig::DEFAULT_AUDIENCE.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// Same type the extractors look up in app data.
pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(jwt_service())
}

pub fn token(user_id: UserId, role: UserRole) -> String {
    let subject = TokenSubject {
        user_id,
        role,
        name: "Test User".to_string(),
        email: format!("{}@example.com", user_id),
    };

    jwt_service()
        .issue_access_token(&subject)
        .expect("test token should be issued")
}

pub fn bearer(user_id: UserId, role: UserRole) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token(user_id, role)))
}
