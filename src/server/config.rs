use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRE_SECS: i64 = 3600;

/// Credentials for the admin account created on first start.
pub struct AdminBootstrap {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub jwt_expire_secs: i64,

    /// Present only when all of `ADMIN_USERNAME`, `ADMIN_EMAIL` and `ADMIN_PASSWORD` are set.
    pub admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_expire_secs = match std::env::var("JWT_EXPIRE_SECS") {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "JWT_EXPIRE_SECS".to_string(),
                    reason: format!("expected a positive number of seconds, got '{}'", value),
                })?,
            Err(_) => DEFAULT_JWT_EXPIRE_SECS,
        };

        let admin = match (
            std::env::var("ADMIN_USERNAME"),
            std::env::var("ADMIN_EMAIL"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(username), Ok(email), Ok(password)) => Some(AdminBootstrap {
                username,
                email,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            jwt_expire_secs,
            admin,
        })
    }
}
