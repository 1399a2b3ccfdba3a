use crate::config::{ConfigError, ConfigSource};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub audience: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub const DEFAULT_ISSUER: &'static str = "mentor-mentee-app";
    pub const DEFAULT_AUDIENCE: &'static str = "mentor-mentee-frontend";
    pub const DEFAULT_ACCESS_EXPIRY: i64 = 3600;

    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        let secret_key = source.required("JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let access_token_expiry =
            source.parse_or("JWT_ACCESS_EXPIRY", Self::DEFAULT_ACCESS_EXPIRY)?;

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds (24 hours)".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer: source
                .get("JWT_ISSUER")
                .unwrap_or_else(|| Self::DEFAULT_ISSUER.to_string()),
            audience: source
                .get("JWT_AUDIENCE")
                .unwrap_or_else(|| Self::DEFAULT_AUDIENCE.to_string()),
            access_token_expiry,
        })
    }
}
