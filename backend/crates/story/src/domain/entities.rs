//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{StoryId, UserId};

/// Travel story record
///
/// `user_id` is set at creation and never changes. `name` and `email` are
/// the owner's details copied at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelStory {
    pub story_id: StoryId,
    pub title: String,
    pub story: String,
    /// Ordered, as entered
    pub visited_location: Vec<String>,
    pub is_favorite: bool,
    pub user_id: UserId,
    /// Server-assigned
    pub created_on: DateTime<Utc>,
    pub image_url: String,
    pub visited_date: DateTime<Utc>,
    pub name: String,
    pub email: String,
}

impl TravelStory {
    /// New story owned by `user_id`, not a favorite
    pub fn new(user_id: UserId, owner: &Owner, changes: StoryChanges) -> Self {
        Self {
            story_id: StoryId::new(),
            title: changes.title,
            story: changes.story,
            visited_location: changes.visited_location,
            is_favorite: false,
            user_id,
            created_on: Utc::now(),
            image_url: changes.image_url,
            visited_date: changes.visited_date,
            name: owner.name.clone(),
            email: owner.email.clone(),
        }
    }

    /// Overwrite the editable fields; owner and favorite flag are untouched
    pub fn apply(&mut self, changes: StoryChanges) {
        self.title = changes.title;
        self.story = changes.story;
        self.visited_location = changes.visited_location;
        self.image_url = changes.image_url;
        self.visited_date = changes.visited_date;
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// Validated editable fields of a story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryChanges {
    pub title: String,
    pub story: String,
    pub visited_location: Vec<String>,
    pub image_url: String,
    pub visited_date: DateTime<Utc>,
}

/// Account details denormalized onto stories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub email: String,
}
