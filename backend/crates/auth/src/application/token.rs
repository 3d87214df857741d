//! Token Service
//!
//! Access and refresh tokens are HS256-signed JWTs carrying the user id in
//! `sub` and their purpose in `typ`. Neither is persisted: a token is valid
//! exactly until its `exp`, which matches the cookie `Max-Age`.

use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Token purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims embedded in every token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user's database id in decimal
    pub sub: String,
    /// Expiration time (UTC Unix timestamp)
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp)
    pub iat: i64,
    /// Unique token identifier (UUID v4)
    pub jti: String,
    /// Access or refresh
    pub typ: TokenType,
}

/// Freshly issued access + refresh tokens
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Issues and validates tokens with the server secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry must line up with the cookie Max-Age
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            validation,
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
        }
    }

    /// Issue an access token and a refresh token for the user
    pub fn issue_pair(&self, user_id: UserId) -> AuthResult<TokenPair> {
        Ok(TokenPair {
            access: self.issue(user_id, TokenType::Access)?,
            refresh: self.issue(user_id, TokenType::Refresh)?,
        })
    }

    /// Mint a new access token from a valid refresh token
    ///
    /// The refresh token itself is neither rotated nor revoked.
    pub fn issue_access(&self, refresh_token: &str) -> AuthResult<String> {
        let user_id = self.decode(refresh_token, TokenType::Refresh)?;
        self.issue(user_id, TokenType::Access)
    }

    /// Validate an access token and return its subject
    pub fn validate(&self, access_token: &str) -> AuthResult<UserId> {
        self.decode(access_token, TokenType::Access)
    }

    fn issue(&self, user_id: UserId, typ: TokenType) -> AuthResult<String> {
        let ttl = match typ {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let now = chrono::Utc::now().timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + ttl.as_secs() as i64,
            iat: now,
            jti: Uuid::new_v4().to_string(),
            typ,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {}", e)))
    }

    fn decode(&self, token: &str, expected: TokenType) -> AuthResult<UserId> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token failed validation");
                AuthError::InvalidToken
            })?
            .claims;

        if claims.typ != expected {
            return Err(AuthError::InvalidToken);
        }

        claims
            .sub
            .parse::<i64>()
            .map(UserId::new)
            .map_err(|_| AuthError::InvalidToken)
    }
}
