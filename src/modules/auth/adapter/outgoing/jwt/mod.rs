mod jwt_config;
mod jwt_service;

pub use jwt_config::{JwtConfig, DEFAULT_ACCESS_EXPIRY_SECS, DEFAULT_ISSUER};
pub use jwt_service::JwtTokenService;
