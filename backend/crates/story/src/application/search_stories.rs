//! Search and Filter Use Cases
//!
//! Both run across every story in the system.

use std::sync::Arc;

use crate::domain::entities::TravelStory;
use crate::domain::repository::StoryRepository;
use crate::domain::value_objects::{SearchTerm, VisitedRange};
use crate::error::StoryResult;

pub struct SearchStoriesUseCase<S>
where
    S: StoryRepository,
{
    stories: Arc<S>,
}

impl<S> SearchStoriesUseCase<S>
where
    S: StoryRepository,
{
    pub fn new(stories: Arc<S>) -> Self {
        Self { stories }
    }

    /// Case-insensitive substring search over title, story and locations
    pub async fn search(&self, query: Option<&str>) -> StoryResult<Vec<TravelStory>> {
        let term = SearchTerm::new(query)?;
        self.stories.search(&term).await
    }

    /// Stories visited within `[start, end]` (epoch milliseconds, inclusive)
    pub async fn filter_by_date(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> StoryResult<Vec<TravelStory>> {
        let range = VisitedRange::from_query(start, end)?;
        self.stories.filter_by_visited_date(&range).await
    }
}
