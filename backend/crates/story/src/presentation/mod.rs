//! Presentation Layer
//!
//! HTTP handlers, DTOs and router. Story management routes sit behind
//! `platform::guard::require_auth`; listing, search and media routes are open.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::StoryAppState;
pub use router::{story_router, story_router_generic};
