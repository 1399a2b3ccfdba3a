use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, TokenSubject,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud", "sub"]);
        validation
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_access_token(&self, subject: &TokenSubject) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            sub: subject.user_id.value(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            jti: Uuid::new_v4(),
            name: subject.name.clone(),
            email: subject.email.clone(),
            role: subject.role,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Unexpected issuer");
                        TokenError::InvalidClaims("iss".to_string())
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Token verification failed: Unexpected audience");
                        TokenError::InvalidClaims("aud".to_string())
                    }
                    ErrorKind::MissingRequiredClaim(claim) => {
                        tracing::warn!(claim = %claim, "Token verification failed: Missing claim");
                        TokenError::InvalidClaims(claim.clone())
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Unknown error");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}
