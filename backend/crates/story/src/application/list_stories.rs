//! List Stories Use Case

use std::sync::Arc;

use platform::guard::AuthContext;

use crate::domain::entities::TravelStory;
use crate::domain::repository::StoryRepository;
use crate::error::StoryResult;

pub struct ListStoriesUseCase<S>
where
    S: StoryRepository,
{
    stories: Arc<S>,
}

impl<S> ListStoriesUseCase<S>
where
    S: StoryRepository,
{
    pub fn new(stories: Arc<S>) -> Self {
        Self { stories }
    }

    /// The caller's own stories, favorites first
    pub async fn own(&self, auth: &AuthContext) -> StoryResult<Vec<TravelStory>> {
        self.stories.list_by_owner(&auth.user_id).await
    }

    /// Everyone's stories, same ordering
    pub async fn public(&self) -> StoryResult<Vec<TravelStory>> {
        self.stories.list_all().await
    }
}
