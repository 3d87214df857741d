//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;

/// Length of symmetric signing secrets in bytes
pub const SECRET_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("secret must be {expected} bytes (got {actual})")]
    Length { expected: usize, actual: usize },
}

/// Generate a fresh signing secret
pub fn random_secret() -> [u8; SECRET_LEN] {
    let mut secret = [0u8; SECRET_LEN];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Decode a base64 signing secret of exactly [`SECRET_LEN`] bytes
pub fn decode_secret(encoded: &str) -> Result<[u8; SECRET_LEN], SecretError> {
    let bytes = from_base64(encoded.trim())?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| SecretError::Length {
        expected: SECRET_LEN,
        actual,
    })
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secrets_differ() {
        assert_ne!(random_secret(), random_secret());
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"hello world";
        let encoded = to_base64(data);
        let decoded = from_base64(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_decode_secret() {
        let secret = [7u8; SECRET_LEN];
        let encoded = format!("{}\n", to_base64(&secret));
        assert_eq!(decode_secret(&encoded).unwrap(), secret);
    }

    #[test]
    fn test_decode_secret_wrong_length() {
        let encoded = to_base64(&[1u8; 16]);
        assert!(matches!(
            decode_secret(&encoded),
            Err(SecretError::Length {
                expected: 32,
                actual: 16
            })
        ));
    }

    #[test]
    fn test_decode_secret_bad_encoding() {
        assert!(matches!(
            decode_secret("not base64!"),
            Err(SecretError::Encoding(_))
        ));
    }
}
