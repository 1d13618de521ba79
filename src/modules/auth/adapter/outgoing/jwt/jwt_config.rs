use crate::config::{env_or, required, ConfigError};

pub const DEFAULT_ISSUER: &str = "BloodSource";
/// Seven days.
pub const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 604_800;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::JwtSecretTooShort);
        }

        let access_token_expiry: i64 = env_or("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_EXPIRY_SECS)?;
        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer: env_or("JWT_ISSUER", DEFAULT_ISSUER.to_string())?,
            access_token_expiry,
        })
    }
}
