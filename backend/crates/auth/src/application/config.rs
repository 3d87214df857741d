//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Access token cookie name
    pub access_cookie_name: String,
    /// Refresh token cookie name
    pub refresh_cookie_name: String,
    /// HS256 signing secret (32 bytes)
    pub token_secret: [u8; 32],
    /// Access token and cookie lifetime (5 minutes)
    pub access_ttl: Duration,
    /// Refresh token and cookie lifetime (7 days)
    pub refresh_ttl: Duration,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_cookie_name: "access_token".to_string(),
            refresh_cookie_name: "refresh_token".to_string(),
            token_secret: [0u8; 32],
            access_ttl: Duration::from_secs(5 * 60),
            refresh_ttl: Duration::from_secs(7 * 24 * 3600),
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn with_secret(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_secret())
    }

    /// Create config for development (random secret, insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Access cookie Max-Age in seconds
    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl.as_secs() as i64
    }

    /// Refresh cookie Max-Age in seconds
    pub fn refresh_ttl_secs(&self) -> i64 {
        self.refresh_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
