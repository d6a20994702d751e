//! Domain Layer
//!
//! Contains entities, value objects, media rules and repository traits.

pub mod entities;
pub mod media;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{Owner, StoryChanges, TravelStory};
pub use media::{MediaType, StoredFilename, is_allowed_media_type, resolve_media_type};
pub use repository::{MediaStore, OwnerRepository, StoryRepository};
pub use value_objects::{SearchTerm, VisitedRange};
