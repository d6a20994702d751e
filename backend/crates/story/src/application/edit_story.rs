//! Edit Story Use Case

use std::sync::Arc;

use kernel::id::StoryId;
use platform::guard::AuthContext;

use crate::application::add_story::StoryInput;
use crate::application::config::StoryConfig;
use crate::domain::repository::StoryRepository;
use crate::error::{StoryError, StoryResult};

pub struct EditStoryUseCase<S>
where
    S: StoryRepository,
{
    stories: Arc<S>,
    config: Arc<StoryConfig>,
}

impl<S> EditStoryUseCase<S>
where
    S: StoryRepository,
{
    pub fn new(stories: Arc<S>, config: Arc<StoryConfig>) -> Self {
        Self { stories, config }
    }

    /// Overwrite title, story, locations, image and visited date
    ///
    /// A missing `imageUrl` resets the image to the configured placeholder.
    /// Unknown, malformed and foreign ids are all `StoryNotFound`.
    pub async fn execute(
        &self,
        auth: &AuthContext,
        raw_id: &str,
        input: StoryInput,
    ) -> StoryResult<()> {
        let changes = input.validate(Some(&self.config.placeholder_image_url))?;

        let story_id = StoryId::parse_str(raw_id).ok_or(StoryError::StoryNotFound)?;

        let updated = self
            .stories
            .update_owned(&story_id, &auth.user_id, &changes)
            .await?;
        if !updated {
            return Err(StoryError::StoryNotFound);
        }

        tracing::info!(user_id = %auth.user_id, story_id = %story_id, "Travel story updated");

        Ok(())
    }
}
