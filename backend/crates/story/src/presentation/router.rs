//! Story Router
//!
//! Mounted by the API under `/api/users`, next to the auth router.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use platform::guard::{AccessGuard, require_auth};

use crate::application::config::StoryConfig;
use crate::domain::repository::{MediaStore, OwnerRepository, StoryRepository};
use crate::infra::local_media::DiskMediaStore;
use crate::infra::postgres::PgStoryRepository;
use crate::presentation::handlers::{self, StoryAppState};

/// Create the Story router with PostgreSQL stories and local filesystem media
pub fn story_router<O>(
    stories: PgStoryRepository,
    owners: O,
    media: DiskMediaStore,
    config: StoryConfig,
    guard: AccessGuard,
) -> Router
where
    O: OwnerRepository + Clone + Send + Sync + 'static,
{
    story_router_generic(stories, owners, media, config, guard)
}

/// Create a generic Story router for any store implementations
pub fn story_router_generic<S, O, M>(
    stories: S,
    owners: O,
    media: M,
    config: StoryConfig,
    guard: AccessGuard,
) -> Router
where
    S: StoryRepository + Clone + Send + Sync + 'static,
    O: OwnerRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let upload_limit = DefaultBodyLimit::max(config.max_upload_bytes);

    let state = StoryAppState {
        stories: Arc::new(stories),
        owners: Arc::new(owners),
        media: Arc::new(media),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/allrequired", post(handlers::add_story::<S, O, M>))
        .route("/getalltravelstory", get(handlers::get_all_stories::<S, O, M>))
        .route("/edit-story/{id}", put(handlers::edit_story::<S, O, M>))
        .route("/delete/{id}", delete(handlers::delete_story::<S, O, M>))
        .route_layer(middleware::from_fn_with_state(guard, require_auth));

    Router::new()
        .route("/getpublicstories", get(handlers::get_public_stories::<S, O, M>))
        .route(
            "/upload-image",
            post(handlers::upload_image::<S, O, M>).layer(upload_limit),
        )
        .route(
            "/delete-image/{filename}",
            delete(handlers::delete_image::<S, O, M>),
        )
        .route("/search", get(handlers::search_stories::<S, O, M>))
        .route("/filterbydate", get(handlers::filter_by_date::<S, O, M>))
        .merge(protected)
        .with_state(state)
}
