//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{StoryId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{StoryChanges, TravelStory};
use crate::domain::repository::StoryRepository;
use crate::domain::value_objects::{SearchTerm, VisitedRange};
use crate::error::StoryResult;

const STORY_COLUMNS: &str = r#"
    story_id,
    title,
    story,
    visited_locations,
    is_favorite,
    user_id,
    created_on,
    image_url,
    visited_date,
    name,
    email
"#;

const LISTING_ORDER: &str = "ORDER BY is_favorite DESC, created_on DESC";

/// PostgreSQL-backed story repository
#[derive(Clone)]
pub struct PgStoryRepository {
    pool: PgPool,
}

impl PgStoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl StoryRepository for PgStoryRepository {
    async fn insert(&self, story: &TravelStory) -> StoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO travel_stories (
                story_id,
                title,
                story,
                visited_locations,
                is_favorite,
                user_id,
                created_on,
                image_url,
                visited_date,
                name,
                email
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(story.story_id.as_uuid())
        .bind(&story.title)
        .bind(&story.story)
        .bind(&story.visited_location)
        .bind(story.is_favorite)
        .bind(story.user_id.as_uuid())
        .bind(story.created_on)
        .bind(&story.image_url)
        .bind(story.visited_date)
        .bind(&story.name)
        .bind(&story.email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_owner(&self, owner: &UserId) -> StoryResult<Vec<TravelStory>> {
        let sql =
            format!("SELECT {STORY_COLUMNS} FROM travel_stories WHERE user_id = $1 {LISTING_ORDER}");

        let rows = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(owner.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(StoryRow::into_story).collect())
    }

    async fn list_all(&self) -> StoryResult<Vec<TravelStory>> {
        let sql = format!("SELECT {STORY_COLUMNS} FROM travel_stories {LISTING_ORDER}");
        let rows = sqlx::query_as::<_, StoryRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(StoryRow::into_story).collect())
    }

    async fn update_owned(
        &self,
        story_id: &StoryId,
        owner: &UserId,
        changes: &StoryChanges,
    ) -> StoryResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE travel_stories
            SET
                title = $3,
                story = $4,
                visited_locations = $5,
                image_url = $6,
                visited_date = $7
            WHERE story_id = $1 AND user_id = $2
            "#,
        )
        .bind(story_id.as_uuid())
        .bind(owner.as_uuid())
        .bind(&changes.title)
        .bind(&changes.story)
        .bind(&changes.visited_location)
        .bind(&changes.image_url)
        .bind(changes.visited_date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_owned(
        &self,
        story_id: &StoryId,
        owner: &UserId,
    ) -> StoryResult<Option<TravelStory>> {
        let sql = format!(
            "DELETE FROM travel_stories WHERE story_id = $1 AND user_id = $2 RETURNING {STORY_COLUMNS}"
        );

        let row = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(story_id.as_uuid())
            .bind(owner.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(StoryRow::into_story))
    }

    async fn search(&self, term: &SearchTerm) -> StoryResult<Vec<TravelStory>> {
        let sql = format!(
            r#"
            SELECT {STORY_COLUMNS}
            FROM travel_stories
            WHERE title ILIKE $1 ESCAPE '\'
               OR story ILIKE $1 ESCAPE '\'
               OR EXISTS (
                   SELECT 1 FROM unnest(visited_locations) AS location
                   WHERE location ILIKE $1 ESCAPE '\'
               )
            {LISTING_ORDER}
            "#
        );

        let rows = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(term.like_pattern())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(StoryRow::into_story).collect())
    }

    async fn filter_by_visited_date(&self, range: &VisitedRange) -> StoryResult<Vec<TravelStory>> {
        let sql = format!(
            "SELECT {STORY_COLUMNS} FROM travel_stories \
             WHERE visited_date >= $1 AND visited_date <= $2 {LISTING_ORDER}"
        );

        let rows = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(range.start)
            .bind(range.end)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(StoryRow::into_story).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct StoryRow {
    story_id: Uuid,
    title: String,
    story: String,
    visited_locations: Vec<String>,
    is_favorite: bool,
    user_id: Uuid,
    created_on: DateTime<Utc>,
    image_url: String,
    visited_date: DateTime<Utc>,
    name: String,
    email: String,
}

impl StoryRow {
    fn into_story(self) -> TravelStory {
        TravelStory {
            story_id: StoryId::from_uuid(self.story_id),
            title: self.title,
            story: self.story,
            visited_location: self.visited_locations,
            is_favorite: self.is_favorite,
            user_id: UserId::from_uuid(self.user_id),
            created_on: self.created_on,
            image_url: self.image_url,
            visited_date: self.visited_date,
            name: self.name,
            email: self.email,
        }
    }
}
