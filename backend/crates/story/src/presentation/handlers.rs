//! HTTP Handlers

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use platform::guard::AuthContext;

use crate::application::config::StoryConfig;
use crate::application::{
    AddStoryUseCase, DeleteImageUseCase, DeleteStoryUseCase, EditStoryUseCase, ImageUpload,
    ListStoriesUseCase, SearchStoriesUseCase, UploadImageUseCase,
};
use crate::domain::repository::{MediaStore, OwnerRepository, StoryRepository};
use crate::error::{StoryError, StoryResult};
use crate::presentation::dto::{
    DateRangeQuery, MessageResponse, PublicStoriesResponse, SearchQuery, StatusMessageResponse,
    StoryCreatedResponse, StoryListResponse, StoryRequest, StoryResponse, UploadResponse,
    to_responses,
};

/// Multipart field carrying the upload
const IMAGE_FIELD: &str = "image";

/// Shared state for story handlers
#[derive(Clone)]
pub struct StoryAppState<S, O, M>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    pub stories: Arc<S>,
    pub owners: Arc<O>,
    pub media: Arc<M>,
    pub config: Arc<StoryConfig>,
}

// ============================================================================
// Story Management (requires authentication)
// ============================================================================

/// POST /api/users/allrequired
pub async fn add_story<S, O, M>(
    State(state): State<StoryAppState<S, O, M>>,
    auth: AuthContext,
    payload: Result<Json<StoryRequest>, JsonRejection>,
) -> StoryResult<(StatusCode, Json<StoryCreatedResponse>)>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| StoryError::InvalidBody(e.body_text()))?;

    let use_case = AddStoryUseCase::new(state.stories.clone(), state.owners.clone());
    let story = use_case.execute(&auth, req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(StoryCreatedResponse {
            story: StoryResponse::from(story),
            message: "Added Successfully",
        }),
    ))
}

/// GET /api/users/getalltravelstory
pub async fn get_all_stories<S, O, M>(
    State(state): State<StoryAppState<S, O, M>>,
    auth: AuthContext,
) -> StoryResult<Json<StoryListResponse>>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let use_case = ListStoriesUseCase::new(state.stories.clone());
    let stories = use_case.own(&auth).await?;

    Ok(Json(StoryListResponse {
        story: to_responses(stories),
    }))
}

/// PUT /api/users/edit-story/{id}
pub async fn edit_story<S, O, M>(
    State(state): State<StoryAppState<S, O, M>>,
    auth: AuthContext,
    Path(id): Path<String>,
    payload: Result<Json<StoryRequest>, JsonRejection>,
) -> StoryResult<Json<StatusMessageResponse>>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| StoryError::InvalidBody(e.body_text()))?;

    let use_case = EditStoryUseCase::new(state.stories.clone(), state.config.clone());
    use_case.execute(&auth, &id, req.into()).await?;

    Ok(Json(StatusMessageResponse {
        error: false,
        message: "Updated successfully",
    }))
}

/// DELETE /api/users/delete/{id}
pub async fn delete_story<S, O, M>(
    State(state): State<StoryAppState<S, O, M>>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> StoryResult<Json<MessageResponse>>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let use_case = DeleteStoryUseCase::new(
        state.stories.clone(),
        state.media.clone(),
        state.config.clone(),
    );
    use_case.execute(&auth, &id).await?;

    Ok(Json(MessageResponse {
        message: "Data deleted successfully",
    }))
}

// ============================================================================
// Public Reads
// ============================================================================

/// GET /api/users/getpublicstories
pub async fn get_public_stories<S, O, M>(
    State(state): State<StoryAppState<S, O, M>>,
) -> StoryResult<Json<PublicStoriesResponse>>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let use_case = ListStoriesUseCase::new(state.stories.clone());
    let stories = use_case.public().await?;

    Ok(Json(PublicStoriesResponse {
        stories: to_responses(stories),
    }))
}

/// GET /api/users/search?query=
pub async fn search_stories<S, O, M>(
    State(state): State<StoryAppState<S, O, M>>,
    Query(params): Query<SearchQuery>,
) -> StoryResult<Json<StoryListResponse>>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let use_case = SearchStoriesUseCase::new(state.stories.clone());
    let stories = use_case.search(params.query.as_deref()).await?;

    Ok(Json(StoryListResponse {
        story: to_responses(stories),
    }))
}

/// GET /api/users/filterbydate?startDate=&endDate=
pub async fn filter_by_date<S, O, M>(
    State(state): State<StoryAppState<S, O, M>>,
    Query(params): Query<DateRangeQuery>,
) -> StoryResult<Json<StoryListResponse>>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let use_case = SearchStoriesUseCase::new(state.stories.clone());
    let stories = use_case
        .filter_by_date(params.start_date.as_deref(), params.end_date.as_deref())
        .await?;

    Ok(Json(StoryListResponse {
        story: to_responses(stories),
    }))
}

// ============================================================================
// Media
// ============================================================================

/// POST /api/users/upload-image
pub async fn upload_image<S, O, M>(
    State(state): State<StoryAppState<S, O, M>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> StoryResult<(StatusCode, Json<UploadResponse>)>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let mut multipart = multipart.map_err(|e| StoryError::InvalidUpload(e.body_text()))?;

    let upload = read_image_field(&mut multipart)
        .await?
        .ok_or(StoryError::NoImage)?;

    let use_case = UploadImageUseCase::new(state.media.clone(), state.config.clone());
    let image_url = use_case.execute(upload).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Image uploaded successfully",
            image_url,
        }),
    ))
}

/// DELETE /api/users/delete-image/{filename}
pub async fn delete_image<S, O, M>(
    State(state): State<StoryAppState<S, O, M>>,
    Path(filename): Path<String>,
) -> StoryResult<Json<MessageResponse>>
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let use_case = DeleteImageUseCase::new(state.media.clone());
    use_case.execute(&filename).await?;

    Ok(Json(MessageResponse {
        message: "Image deleted successfully",
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// First `image` field of the form; other fields are skipped
async fn read_image_field(multipart: &mut Multipart) -> StoryResult<Option<ImageUpload>> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(upload_error)?;

        return Ok(Some(ImageUpload {
            filename,
            content_type,
            bytes: bytes.into(),
        }));
    }

    Ok(None)
}

fn upload_error(e: MultipartError) -> StoryError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        StoryError::UploadTooLarge
    } else {
        StoryError::InvalidUpload(e.body_text())
    }
}
