//! Password Hashing and Verification
//!
//! - Argon2id hashing with a random 128-bit salt, stored as a PHC string
//! - NFKC normalization and a minimum length (NIST SP 800-63B)
//! - Zeroization of clear-text material, including the peppered buffer

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants (NIST SP 800-63B compliant)
// ============================================================================

/// Minimum password length in code points
///
/// There is no upper bound; request body limits cap the input size.
pub const MIN_PASSWORD_LENGTH: usize = 8;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
///
/// The messages are shown to the user under the `password` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("This password is too short. It must contain at least {min} characters.")]
    TooShort { min: usize, actual: usize },

    #[error("This field may not be blank.")]
    EmptyOrWhitespace,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Not `Clone`, and `Debug` output is redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalize and validate a password chosen at signup
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::unvalidated(raw);
        check_policy(&password.0)?;
        Ok(password)
    }

    /// Normalize a password presented at login
    ///
    /// No policy is applied; a password that could never have been stored
    /// simply fails verification.
    pub fn unvalidated(raw: String) -> Self {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    /// Hash the password using Argon2id
    ///
    /// `pepper` is an optional application-wide secret appended before hashing.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let material = self.peppered(pepper);
        let salt = SaltString::generate(&mut OsRng);

        // Argon2id defaults: m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(&material, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut material = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            material.extend_from_slice(p);
        }
        material
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

fn check_policy(normalized: &str) -> Result<(), PasswordPolicyError> {
    if normalized.trim().is_empty() {
        return Err(PasswordPolicyError::EmptyOrWhitespace);
    }

    // Code points, not bytes
    let char_count = normalized.chars().count();
    if char_count < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: char_count,
        });
    }

    Ok(())
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format (`$argon2id$v=19$m=...`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// `pepper` must match the one used during hashing.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        // Argon2 compares in constant time
        Argon2::default()
            .verify_password(&password.peppered(pepper), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 8, actual: 5 })
        ));
    }

    #[test]
    fn test_long_passwords_are_accepted() {
        let long_password = "a".repeat(1024);
        let password = ClearTextPassword::new(long_password.clone()).unwrap();
        let hashed = password.hash(None).unwrap();
        assert!(hashed.verify(&ClearTextPassword::unvalidated(long_password), None));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("        ".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_control_characters_are_kept() {
        assert!(ClearTextPassword::new("abc\u{7}defgh".to_string()).is_ok());
    }

    #[test]
    fn test_simple_passwords_meet_policy() {
        assert!(ClearTextPassword::new("password123".to_string()).is_ok());
        assert!(ClearTextPassword::new("12345678".to_string()).is_ok());
    }

    #[test]
    fn test_length_counts_code_points() {
        // 8 code points, 24 bytes
        assert!(ClearTextPassword::new("パスワード安全で".to_string()).is_ok());
    }

    #[test]
    fn test_policy_message() {
        let err = ClearTextPassword::new("short".to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "This password is too short. It must contain at least 8 characters."
        );
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong_password = ClearTextPassword::unvalidated("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_unvalidated_password_still_verifies() {
        let stored = ClearTextPassword::new("TestPassword123!".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        let presented = ClearTextPassword::unvalidated("TestPassword123!".to_string());
        assert!(stored.verify(&presented, None));
    }

    #[test]
    fn test_nfkc_equivalent_passwords_verify() {
        // Full-width digits normalize to ASCII
        let stored = ClearTextPassword::new("secret１２３".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        let presented = ClearTextPassword::unvalidated("secret123".to_string());
        assert!(stored.verify(&presented, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::unvalidated("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
