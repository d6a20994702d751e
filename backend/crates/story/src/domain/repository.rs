//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Every listing is ordered `is_favorite DESC, created_on DESC`.

use kernel::id::{StoryId, UserId};

use crate::domain::entities::{Owner, StoryChanges, TravelStory};
use crate::domain::media::StoredFilename;
use crate::domain::value_objects::{SearchTerm, VisitedRange};
use crate::error::StoryResult;

/// Story repository trait
#[trait_variant::make(StoryRepository: Send)]
pub trait LocalStoryRepository {
    async fn insert(&self, story: &TravelStory) -> StoryResult<()>;

    /// Stories owned by `owner`
    async fn list_by_owner(&self, owner: &UserId) -> StoryResult<Vec<TravelStory>>;

    /// Every story in the system
    async fn list_all(&self) -> StoryResult<Vec<TravelStory>>;

    /// Apply `changes` to the story matching both id and owner; `false` if none did
    async fn update_owned(
        &self,
        story_id: &StoryId,
        owner: &UserId,
        changes: &StoryChanges,
    ) -> StoryResult<bool>;

    /// Delete the story matching both id and owner, returning what was removed
    async fn delete_owned(
        &self,
        story_id: &StoryId,
        owner: &UserId,
    ) -> StoryResult<Option<TravelStory>>;

    /// Substring match on title, story or any visited location
    async fn search(&self, term: &SearchTerm) -> StoryResult<Vec<TravelStory>>;

    /// Stories with `visited_date` inside the inclusive range
    async fn filter_by_visited_date(&self, range: &VisitedRange) -> StoryResult<Vec<TravelStory>>;
}

/// Lookup of the account details copied onto new stories
#[trait_variant::make(OwnerRepository: Send)]
pub trait LocalOwnerRepository {
    async fn find_owner(&self, user_id: &UserId) -> StoryResult<Option<Owner>>;
}

/// Storage for uploaded images
#[trait_variant::make(MediaStore: Send)]
pub trait LocalMediaStore {
    /// Persist a new file; never overwrites an existing one
    async fn save(&self, filename: &StoredFilename, bytes: &[u8]) -> StoryResult<()>;

    /// Remove a file; `false` when it did not exist
    async fn remove(&self, filename: &StoredFilename) -> StoryResult<bool>;
}
