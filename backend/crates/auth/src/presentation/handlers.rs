//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::cookie::set_cookie_header;
use platform::guard::AuthContext;
use platform::token::TokenService;

use crate::application::config::AuthConfig;
use crate::application::{
    GetUserUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/users/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| AuthError::InvalidBody(e.body_text()))?;

    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let input = RegisterInput {
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let output = use_case.execute(input).await?;

    let response = (
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registered Successfully",
        }),
    )
        .into_response();

    Ok(with_session_cookie(&state.config, &output.token, response))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/users/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| AuthError::InvalidBody(e.body_text()))?;

    let use_case =
        LoginUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let output = use_case.execute(input).await?;

    let response = (
        StatusCode::OK,
        Json(LoginResponse {
            message: "Logged in Successfully",
            token: output.token.clone(),
        }),
    )
        .into_response();

    Ok(with_session_cookie(&state.config, &output.token, response))
}

// ============================================================================
// Profile (requires authentication)
// ============================================================================

/// GET /api/users/get-user
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    auth: AuthContext,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetUserUseCase::new(state.repo.clone());
    let profile = use_case.execute(&auth).await?;

    Ok(Json(UserResponse {
        id: profile.id,
        name: profile.name,
        email: profile.email,
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn with_session_cookie(config: &AuthConfig, token: &str, mut response: Response) -> Response {
    if let Some(cookie) = set_cookie_header(&config.cookie, token) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}
