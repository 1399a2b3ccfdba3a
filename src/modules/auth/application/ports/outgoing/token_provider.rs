use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};

#[derive(Debug)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidSignature,
    InvalidClaims(String),
    MalformedToken,
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::InvalidClaims(claim) => write!(f, "Invalid token claim: {}", claim),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}
impl Error for TokenError {}

/// Who a token is issued for.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub role: UserRole,
    pub name: String,
    pub email: String,
}

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: String,
    pub aud: String,
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub jti: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

pub trait TokenProvider: Send + Sync {
    fn issue_access_token(&self, subject: &TokenSubject) -> Result<String, TokenError>;

    /// Signature, expiry, issuer and audience must all hold.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
