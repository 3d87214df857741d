//! Session Cookies
//!
//! Maps the token lifecycle onto `Set-Cookie` headers.

use axum::http::HeaderMap;
use platform::cookie::{CookieConfig, append_set_cookie, extract_cookie};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Access/refresh cookie pair built from [`AuthConfig`]
#[derive(Debug, Clone)]
pub struct SessionCookies {
    access: CookieConfig,
    refresh: CookieConfig,
}

impl SessionCookies {
    pub fn new(config: &AuthConfig) -> Self {
        let cookie = |name: &str, max_age: i64| {
            CookieConfig::http_only(name, max_age, config.cookie_secure)
                .with_same_site(config.cookie_same_site)
        };

        Self {
            access: cookie(&config.access_cookie_name, config.access_ttl_secs()),
            refresh: cookie(&config.refresh_cookie_name, config.refresh_ttl_secs()),
        }
    }

    /// Set both cookies
    pub fn set_pair(&self, headers: &mut HeaderMap, access: &str, refresh: &str) -> AuthResult<()> {
        self.set_access_only(headers, access)?;
        append(headers, &self.refresh.build_set_cookie(refresh))
    }

    /// Set the access cookie, leaving the refresh cookie untouched
    pub fn set_access_only(&self, headers: &mut HeaderMap, access: &str) -> AuthResult<()> {
        append(headers, &self.access.build_set_cookie(access))
    }

    /// Expire both cookies
    pub fn clear(&self, headers: &mut HeaderMap) -> AuthResult<()> {
        append(headers, &self.access.build_delete_cookie())?;
        append(headers, &self.refresh.build_delete_cookie())
    }

    pub fn extract_access(&self, headers: &HeaderMap) -> Option<String> {
        extract_cookie(headers, &self.access.name)
    }

    pub fn extract_refresh(&self, headers: &HeaderMap) -> Option<String> {
        extract_cookie(headers, &self.refresh.name)
    }
}

fn append(headers: &mut HeaderMap, cookie: &str) -> AuthResult<()> {
    append_set_cookie(headers, cookie)
        .map_err(|e| AuthError::Internal(format!("Invalid Set-Cookie value: {}", e)))
}
