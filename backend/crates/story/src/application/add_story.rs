//! Add Story Use Case

use std::sync::Arc;

use platform::guard::AuthContext;

use crate::domain::entities::{StoryChanges, TravelStory};
use crate::domain::repository::{OwnerRepository, StoryRepository};
use crate::domain::value_objects::from_millis;
use crate::error::{StoryError, StoryResult};

/// Story fields as received; validated into [`StoryChanges`]
#[derive(Debug, Clone, Default)]
pub struct StoryInput {
    pub title: Option<String>,
    pub story: Option<String>,
    pub visited_location: Option<Vec<String>>,
    pub image_url: Option<String>,
    /// Epoch milliseconds
    pub visited_date: Option<i64>,
}

impl StoryInput {
    /// Every field must be present and non-blank, except that a missing
    /// image falls back to `image_fallback` when one is given
    pub fn validate(self, image_fallback: Option<&str>) -> StoryResult<StoryChanges> {
        let title = non_blank(self.title).ok_or(StoryError::MissingFields)?;
        let story = non_blank(self.story).ok_or(StoryError::MissingFields)?;

        let visited_location: Vec<String> = self
            .visited_location
            .unwrap_or_default()
            .into_iter()
            .filter_map(|location| non_blank(Some(location)))
            .collect();
        if visited_location.is_empty() {
            return Err(StoryError::MissingFields);
        }

        let image_url = match (non_blank(self.image_url), image_fallback) {
            (Some(url), _) => url,
            (None, Some(fallback)) => fallback.to_string(),
            (None, None) => return Err(StoryError::MissingFields),
        };

        let visited_date = from_millis(self.visited_date.ok_or(StoryError::MissingFields)?)?;

        Ok(StoryChanges {
            title,
            story,
            visited_location,
            image_url,
            visited_date,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Add story use case
pub struct AddStoryUseCase<S, O>
where
    S: StoryRepository,
    O: OwnerRepository,
{
    stories: Arc<S>,
    owners: Arc<O>,
}

impl<S, O> AddStoryUseCase<S, O>
where
    S: StoryRepository,
    O: OwnerRepository,
{
    pub fn new(stories: Arc<S>, owners: Arc<O>) -> Self {
        Self { stories, owners }
    }

    /// Create a story owned by the caller
    pub async fn execute(&self, auth: &AuthContext, input: StoryInput) -> StoryResult<TravelStory> {
        let changes = input.validate(None)?;

        let owner = self
            .owners
            .find_owner(&auth.user_id)
            .await?
            .ok_or(StoryError::OwnerNotFound)?;

        let story = TravelStory::new(auth.user_id, &owner, changes);
        self.stories.insert(&story).await?;

        tracing::info!(
            user_id = %story.user_id,
            story_id = %story.story_id,
            "Travel story added"
        );

        Ok(story)
    }
}
