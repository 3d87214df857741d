//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod refresh;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use refresh::RefreshUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token::{TokenPair, TokenService};
