use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::adapter::outgoing::security::argon2_hasher::{
    DEFAULT_ITERATIONS, DEFAULT_MEMORY_KIB, DEFAULT_PARALLELISM,
};
use crate::auth::application::services::StaffAccountSpec;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    JwtSecretTooShort,
}

/// Reads `key`, falling back to `default` when unset or blank.
pub fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
                key,
                value: raw.clone(),
            })
        }
        _ => Ok(default),
    }
}

pub fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn optional(key: &'static str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub run_migrations: bool,
    pub jwt: JwtConfig,
    pub argon2: Argon2Settings,
    pub story_reaper_interval: Duration,
    pub bootstrap_staff: Option<StaffAccountSpec>,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let interval_secs: u64 = env_or("STORY_REAPER_INTERVAL_SECS", 3600)?;
        if interval_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "STORY_REAPER_INTERVAL_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 8080)?,
            database_url: required("DATABASE_URL")?,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 20)?,
            db_min_connections: env_or("DB_MIN_CONNECTIONS", 2)?,
            run_migrations: env_or("RUN_MIGRATIONS", true)?,
            jwt: JwtConfig::from_env()?,
            argon2: Argon2Settings {
                memory_kib: env_or("ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB)?,
                iterations: env_or("ARGON2_ITERATIONS", DEFAULT_ITERATIONS)?,
                parallelism: env_or("ARGON2_PARALLELISM", DEFAULT_PARALLELISM)?,
            },
            story_reaper_interval: Duration::from_secs(interval_secs),
            bootstrap_staff: Self::bootstrap_staff_from_env(),
        })
    }

    /// Both email and password must be present, otherwise no staff account is provisioned.
    fn bootstrap_staff_from_env() -> Option<StaffAccountSpec> {
        let email = optional("BOOTSTRAP_STAFF_EMAIL")?;
        let password = optional("BOOTSTRAP_STAFF_PASSWORD")?;

        Some(StaffAccountSpec {
            email,
            password,
            username: optional("BOOTSTRAP_STAFF_USERNAME").unwrap_or_else(|| "admin".to_string()),
            full_name: optional("BOOTSTRAP_STAFF_FULL_NAME")
                .unwrap_or_else(|| "BloodSource Staff".to_string()),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
