//! Presentation Layer
//!
//! HTTP handlers, DTOs and router. Route protection is
//! `platform::guard::require_auth`.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::AuthAppState;
pub use router::{auth_router, auth_router_generic};
