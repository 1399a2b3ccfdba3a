use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};
use crate::config::{ConfigError, ConfigSource};

/// Validated Argon2id cost parameters.
#[derive(Debug, Clone)]
pub struct Argon2Config {
    params: Params,
}

impl Argon2Config {
    // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
    pub const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
    pub const DEFAULT_ITERATIONS: u32 = 3;
    pub const DEFAULT_PARALLELISM: u32 = 1;

    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, ConfigError> {
        let params =
            Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
                ConfigError::Invalid {
                    key: "ARGON2_*",
                    reason: e.to_string(),
                }
            })?;

        Ok(Self { params })
    }

    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        Self::new(
            source.parse_or("ARGON2_MEMORY_KIB", Self::DEFAULT_MEMORY_KIB)?,
            source.parse_or("ARGON2_ITERATIONS", Self::DEFAULT_ITERATIONS)?,
            source.parse_or("ARGON2_PARALLELISM", Self::DEFAULT_PARALLELISM)?,
        )
    }
}

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    pub fn new(config: &Argon2Config) -> Self {
        Self {
            params: config.params.clone(),
            #[cfg(test)]
            salt_override: None,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        let config = Argon2Config::new(
            Argon2Config::DEFAULT_MEMORY_KIB,
            Argon2Config::DEFAULT_ITERATIONS,
            Argon2Config::DEFAULT_PARALLELISM,
        )
        .expect("Invalid params");
        Self::new(&config)
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
            ..Self::for_tests()
        }
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        // Cost parameters come from the PHC string, so hashes made with older
        // settings keep verifying.
        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
