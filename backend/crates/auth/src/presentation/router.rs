//! Auth Router
//!
//! Mounted by the API under `/api/users`.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use platform::guard::{AccessGuard, require_auth};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig, guard: AccessGuard) -> Router {
    auth_router_generic(repo, config, guard)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig, guard: AccessGuard) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens: guard.tokens().clone(),
    };

    let protected = Router::new()
        .route("/get-user", get(handlers::get_user::<R>))
        .route_layer(middleware::from_fn_with_state(guard, require_auth));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
