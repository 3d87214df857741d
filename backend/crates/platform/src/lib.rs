//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie rendering and parsing
//! - Password hashing (Argon2id, 8-character minimum after NFKC)
//! - Random secrets and Base64 helpers

pub mod cookie;
pub mod crypto;
pub mod password;
