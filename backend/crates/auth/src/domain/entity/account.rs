//! New Account
//!
//! Everything that must be written atomically when a user signs up.

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// Category seeded into every new account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterCategory {
    pub name: &'static str,
    pub color_hex: &'static str,
}

/// Default categories, inserted in this order
pub const DEFAULT_CATEGORIES: [StarterCategory; 3] = [
    StarterCategory {
        name: "Random Thoughts",
        color_hex: "#F3C6A3",
    },
    StarterCategory {
        name: "School",
        color_hex: "#B7CCC3",
    },
    StarterCategory {
        name: "Personal",
        color_hex: "#FBE6BB",
    },
];

/// Account to be created
///
/// The user row and every starter category are persisted in one
/// transaction; either all of them exist afterwards or none do.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub password_hash: UserPassword,
    pub starter_categories: &'static [StarterCategory],
}

impl NewAccount {
    /// Account seeded with [`DEFAULT_CATEGORIES`]
    pub fn with_default_categories(email: Email, password_hash: UserPassword) -> Self {
        Self {
            email,
            password_hash,
            starter_categories: &DEFAULT_CATEGORIES,
        }
    }
}
