//! Delete Story Use Case
//!
//! The row deletion is authoritative. Removing the image afterwards is
//! best-effort: failures are logged and never reach the caller.

use std::sync::Arc;

use kernel::id::StoryId;
use platform::guard::AuthContext;

use crate::application::config::StoryConfig;
use crate::domain::entities::TravelStory;
use crate::domain::media::StoredFilename;
use crate::domain::repository::{MediaStore, StoryRepository};
use crate::error::{StoryError, StoryResult};

pub struct DeleteStoryUseCase<S, M>
where
    S: StoryRepository,
    M: MediaStore,
{
    stories: Arc<S>,
    media: Arc<M>,
    config: Arc<StoryConfig>,
}

impl<S, M> DeleteStoryUseCase<S, M>
where
    S: StoryRepository,
    M: MediaStore,
{
    pub fn new(stories: Arc<S>, media: Arc<M>, config: Arc<StoryConfig>) -> Self {
        Self {
            stories,
            media,
            config,
        }
    }

    pub async fn execute(&self, auth: &AuthContext, raw_id: &str) -> StoryResult<TravelStory> {
        let story_id = StoryId::parse_str(raw_id).ok_or(StoryError::StoryNotFound)?;

        let deleted = self
            .stories
            .delete_owned(&story_id, &auth.user_id)
            .await?
            .ok_or(StoryError::StoryNotFound)?;

        tracing::info!(user_id = %auth.user_id, story_id = %story_id, "Travel story deleted");

        self.remove_image(&deleted).await;

        Ok(deleted)
    }

    async fn remove_image(&self, story: &TravelStory) {
        let Some(filename) =
            StoredFilename::from_image_url(&story.image_url, &self.config.media_url_prefix)
        else {
            return;
        };

        match self.media.remove(&filename).await {
            Ok(true) => tracing::debug!(filename = %filename, "Removed image of deleted story"),
            Ok(false) => tracing::debug!(filename = %filename, "Image of deleted story already gone"),
            Err(e) => tracing::warn!(
                filename = %filename,
                story_id = %story.story_id,
                error = %e,
                "Failed to remove image of deleted story"
            ),
        }
    }
}
