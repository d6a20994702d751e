//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod get_user;
pub mod login;
pub mod register;

// Re-exports
pub use config::AuthConfig;
pub use get_user::{GetUserUseCase, UserProfile};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
