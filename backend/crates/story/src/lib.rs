//! Story (Travel Journal) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Travel story entity, media rules, repository traits
//! - `application/` - Story and media use cases
//! - `infra/` - PostgreSQL, in-memory and local filesystem implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! - Every caller-scoped read and every mutation filters on
//!   (story id, caller id); a mismatch is indistinguishable from a missing
//!   story and is reported as 404
//! - The owner of a story is fixed at creation
//! - Image files are not coupled to story rows: deleting a story removes its
//!   image best-effort, and a failure there never fails the deletion

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::StoryConfig;
pub use domain::entities::{Owner, TravelStory};
pub use domain::repository::{MediaStore, OwnerRepository, StoryRepository};
pub use error::{StoryError, StoryResult};
pub use infra::local_media::DiskMediaStore;
pub use infra::memory::{MemoryMediaStore, MemoryOwnerRepository, MemoryStoryRepository};
pub use infra::postgres::PgStoryRepository;
pub use presentation::router::{story_router, story_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::media::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
