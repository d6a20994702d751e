//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the wire format used by the web client (`_id`,
//! `visitedLocation`, `userid`, ...). Timestamps are epoch milliseconds.

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::application::StoryInput;
use crate::domain::entities::TravelStory;
use crate::domain::value_objects::to_millis;

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /allrequired` and `PUT /edit-story/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub visited_location: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Number or numeric string
    #[serde(default, deserialize_with = "epoch_millis")]
    pub visited_date: Option<i64>,
}

impl From<StoryRequest> for StoryInput {
    fn from(req: StoryRequest) -> Self {
        Self {
            title: req.title,
            story: req.story,
            visited_location: req.visited_location,
            image_url: req.image_url,
            visited_date: req.visited_date,
        }
    }
}

/// `GET /search?query=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

/// `GET /filterbydate?startDate=&endDate=`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Millis {
    Int(i64),
    Float(f64),
    Text(String),
}

fn epoch_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Millis>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Millis::Int(ms)) => Ok(Some(ms)),
        Some(Millis::Float(ms)) if ms.is_finite() => Ok(Some(ms.trunc() as i64)),
        Some(Millis::Float(ms)) => Err(de::Error::custom(format!(
            "{ms} is not a valid timestamp"
        ))),
        Some(Millis::Text(raw)) if raw.trim().is_empty() => Ok(None),
        Some(Millis::Text(raw)) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("'{raw}' is not epoch milliseconds"))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<String>),
    One(String),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
            OneOrMany::Many(locations) => locations,
            OneOrMany::One(location) => vec![location],
        }),
    )
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub story: String,
    pub visited_location: Vec<String>,
    pub is_favorite: bool,
    #[serde(rename = "userid")]
    pub user_id: String,
    pub created_on: i64,
    pub image_url: String,
    pub visited_date: i64,
    pub name: String,
    pub email: String,
}

impl From<TravelStory> for StoryResponse {
    fn from(story: TravelStory) -> Self {
        Self {
            id: story.story_id.to_string(),
            title: story.title,
            story: story.story,
            visited_location: story.visited_location,
            is_favorite: story.is_favorite,
            user_id: story.user_id.to_string(),
            created_on: to_millis(&story.created_on),
            image_url: story.image_url,
            visited_date: to_millis(&story.visited_date),
            name: story.name,
            email: story.email,
        }
    }
}

pub fn to_responses(stories: Vec<TravelStory>) -> Vec<StoryResponse> {
    stories.into_iter().map(StoryResponse::from).collect()
}

/// `POST /allrequired`
#[derive(Debug, Clone, Serialize)]
pub struct StoryCreatedResponse {
    pub story: StoryResponse,
    pub message: &'static str,
}

/// Caller-scoped listings, search and filter: `{ "story": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct StoryListResponse {
    pub story: Vec<StoryResponse>,
}

/// `GET /getpublicstories`: `{ "stories": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct PublicStoriesResponse {
    pub stories: Vec<StoryResponse>,
}

/// `PUT /edit-story/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessageResponse {
    pub error: bool,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `POST /upload-image`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: &'static str,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visited_date_accepts_number_or_string() {
        let req: StoryRequest =
            serde_json::from_str(r#"{"visitedDate": 1717200000000}"#).unwrap();
        assert_eq!(req.visited_date, Some(1_717_200_000_000));

        let req: StoryRequest =
            serde_json::from_str(r#"{"visitedDate": "1717200000000"}"#).unwrap();
        assert_eq!(req.visited_date, Some(1_717_200_000_000));

        let req: StoryRequest = serde_json::from_str(r#"{"visitedDate": ""}"#).unwrap();
        assert_eq!(req.visited_date, None);

        assert!(serde_json::from_str::<StoryRequest>(r#"{"visitedDate": "June"}"#).is_err());
    }

    #[test]
    fn test_visited_location_single_string() {
        let req: StoryRequest =
            serde_json::from_str(r#"{"visitedLocation": "Paris"}"#).unwrap();
        assert_eq!(req.visited_location, Some(vec!["Paris".to_string()]));

        let req: StoryRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(req.visited_location, None);
    }

    #[test]
    fn test_story_response_wire_names() {
        use crate::domain::entities::{Owner, StoryChanges};
        use crate::domain::value_objects::from_millis;
        use kernel::id::UserId;

        let owner = Owner {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let story = TravelStory::new(
            UserId::new(),
            &owner,
            StoryChanges {
                title: "Paris".to_string(),
                story: "Croissants".to_string(),
                visited_location: vec!["Paris".to_string()],
                image_url: "/uploads/1-a.png".to_string(),
                visited_date: from_millis(1_717_200_000_000).unwrap(),
            },
        );
        let id = story.story_id.to_string();

        let json = serde_json::to_value(StoryResponse::from(story)).unwrap();
        assert_eq!(json["_id"], id);
        assert_eq!(json["visitedLocation"][0], "Paris");
        assert_eq!(json["isFavorite"], false);
        assert_eq!(json["visitedDate"], 1_717_200_000_000_i64);
        assert_eq!(json["imageUrl"], "/uploads/1-a.png");
        assert!(json["userid"].is_string());
        assert!(json["createdOn"].is_i64());
    }
}
