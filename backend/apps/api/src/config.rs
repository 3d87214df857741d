//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use std::net::SocketAddr;

use auth::AuthConfig;
use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Everything `main` needs to start serving
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = parse_origins(
            &lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let cookie_secure = match lookup("SECURE_COOKIE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                name: "SECURE_COOKIE",
                reason: format!("expected true/false, got {raw:?}"),
            })?,
            None => false,
        };

        let token_secret = match lookup("AUTH_TOKEN_SECRET") {
            Some(encoded) => platform::crypto::decode_secret(encoded.trim()).map_err(|e| {
                ConfigError::Invalid {
                    name: "AUTH_TOKEN_SECRET",
                    reason: e.to_string(),
                }
            })?,
            None if cfg!(debug_assertions) => {
                tracing::warn!("AUTH_TOKEN_SECRET not set; using a random secret");
                platform::crypto::random_secret()
            }
            None => return Err(ConfigError::Missing("AUTH_TOKEN_SECRET")),
        };

        let password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        let auth = AuthConfig {
            cookie_secure,
            password_pepper,
            ..AuthConfig::with_secret(token_secret)
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            frontend_origins,
            auth,
        })
    }
}

/// Comma-separated origins; unparsable entries are skipped
fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
