//! Infrastructure Layer
//!
//! PostgreSQL story repository, local filesystem media store, and in-memory
//! stand-ins for both.

pub mod local_media;
pub mod memory;
pub mod postgres;

pub use local_media::DiskMediaStore;
pub use memory::{MemoryMediaStore, MemoryOwnerRepository, MemoryStoryRepository};
pub use postgres::PgStoryRepository;
