//! Application Layer
//!
//! Use cases and application services.

pub mod add_story;
pub mod config;
pub mod delete_story;
pub mod edit_story;
pub mod list_stories;
pub mod media;
pub mod search_stories;

// Re-exports
pub use add_story::{AddStoryUseCase, StoryInput};
pub use config::StoryConfig;
pub use delete_story::DeleteStoryUseCase;
pub use edit_story::EditStoryUseCase;
pub use list_stories::ListStoriesUseCase;
pub use media::{DeleteImageUseCase, ImageUpload, UploadImageUseCase};
pub use search_stories::SearchStoriesUseCase;
