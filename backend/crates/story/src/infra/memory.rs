//! In-memory Implementations
//!
//! Same contracts as the Postgres repository and the filesystem media store,
//! including listing order and no-overwrite saves.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use kernel::id::{StoryId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::{Owner, StoryChanges, TravelStory};
use crate::domain::media::StoredFilename;
use crate::domain::repository::{MediaStore, OwnerRepository, StoryRepository};
use crate::domain::value_objects::{SearchTerm, VisitedRange};
use crate::error::{StoryError, StoryResult};

// ============================================================================
// Stories
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct MemoryStoryRepository {
    stories: Arc<RwLock<HashMap<StoryId, TravelStory>>>,
}

impl MemoryStoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, story_id: &StoryId) -> Option<TravelStory> {
        self.stories.read().await.get(story_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.stories.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.stories.read().await.is_empty()
    }

    /// Flip the favorite flag directly; there is no API operation for it
    pub async fn set_favorite(&self, story_id: &StoryId, is_favorite: bool) -> bool {
        match self.stories.write().await.get_mut(story_id) {
            Some(story) => {
                story.is_favorite = is_favorite;
                true
            }
            None => false,
        }
    }

    async fn collect(&self, keep: impl Fn(&TravelStory) -> bool) -> Vec<TravelStory> {
        let mut found: Vec<TravelStory> = self
            .stories
            .read()
            .await
            .values()
            .filter(|story| keep(story))
            .cloned()
            .collect();

        found.sort_by_key(|story| Reverse((story.is_favorite, story.created_on)));
        found
    }
}

impl StoryRepository for MemoryStoryRepository {
    async fn insert(&self, story: &TravelStory) -> StoryResult<()> {
        self.stories
            .write()
            .await
            .insert(story.story_id, story.clone());
        Ok(())
    }

    async fn list_by_owner(&self, owner: &UserId) -> StoryResult<Vec<TravelStory>> {
        Ok(self.collect(|story| story.is_owned_by(owner)).await)
    }

    async fn list_all(&self) -> StoryResult<Vec<TravelStory>> {
        Ok(self.collect(|_| true).await)
    }

    async fn update_owned(
        &self,
        story_id: &StoryId,
        owner: &UserId,
        changes: &StoryChanges,
    ) -> StoryResult<bool> {
        let mut stories = self.stories.write().await;

        match stories.get_mut(story_id) {
            Some(story) if story.is_owned_by(owner) => {
                story.apply(changes.clone());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_owned(
        &self,
        story_id: &StoryId,
        owner: &UserId,
    ) -> StoryResult<Option<TravelStory>> {
        let mut stories = self.stories.write().await;

        match stories.get(story_id) {
            Some(story) if story.is_owned_by(owner) => Ok(stories.remove(story_id)),
            _ => Ok(None),
        }
    }

    async fn search(&self, term: &SearchTerm) -> StoryResult<Vec<TravelStory>> {
        Ok(self
            .collect(|story| {
                term.matches(&story.title)
                    || term.matches(&story.story)
                    || story.visited_location.iter().any(|loc| term.matches(loc))
            })
            .await)
    }

    async fn filter_by_visited_date(&self, range: &VisitedRange) -> StoryResult<Vec<TravelStory>> {
        Ok(self
            .collect(|story| range.contains(&story.visited_date))
            .await)
    }
}

// ============================================================================
// Owners
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct MemoryOwnerRepository {
    owners: Arc<RwLock<HashMap<UserId, Owner>>>,
}

impl MemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user_id: UserId, owner: Owner) {
        self.owners.write().await.insert(user_id, owner);
    }
}

impl OwnerRepository for MemoryOwnerRepository {
    async fn find_owner(&self, user_id: &UserId) -> StoryResult<Option<Owner>> {
        Ok(self.owners.read().await.get(user_id).cloned())
    }
}

// ============================================================================
// Media
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct MemoryMediaStore {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, filename: &str) -> Option<Vec<u8>> {
        self.files.read().await.get(filename).cloned()
    }

    pub async fn contains(&self, filename: &str) -> bool {
        self.files.read().await.contains_key(filename)
    }

    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

impl MediaStore for MemoryMediaStore {
    async fn save(&self, filename: &StoredFilename, bytes: &[u8]) -> StoryResult<()> {
        let mut files = self.files.write().await;

        if files.contains_key(filename.as_str()) {
            return Err(StoryError::Media(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{filename} already exists"),
            )));
        }

        files.insert(filename.as_str().to_string(), bytes.to_vec());
        Ok(())
    }

    async fn remove(&self, filename: &StoredFilename) -> StoryResult<bool> {
        Ok(self.files.write().await.remove(filename.as_str()).is_some())
    }
}
