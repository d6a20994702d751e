//! Auth (Identity) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity entity, value objects, repository trait
//! - `application/` - Register, login and profile use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in clear
//! - Sessions are stateless HS256 tokens (`platform::token`) carried in an
//!   HttpOnly `token` cookie or an `Authorization: Bearer` header
//! - Email uniqueness is checked before insert and enforced by a unique index

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::user::User;
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryAuthRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
