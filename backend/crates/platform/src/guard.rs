//! Access Guard
//!
//! Middleware that resolves the session token on a request into an
//! [`AuthContext`] before a protected handler runs. This is the only
//! authorization mechanism: there are no roles, only "is this the owner".
//!
//! Handlers take `AuthContext` as a typed parameter; it is produced by the
//! guard and never reconstructed from headers inside a handler.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderMap, header, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::id::UserId;
use thiserror::Error;

use crate::cookie::extract_cookie;
use crate::token::{TokenError, TokenService};

/// Identity resolved from a verified session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: UserId,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("Unauthorized: No token provided")]
    MissingToken,

    #[error("Unauthorized: Invalid token")]
    InvalidToken(#[source] TokenError),
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        match &self {
            GuardError::MissingToken => tracing::debug!("Request without session token"),
            GuardError::InvalidToken(e) => tracing::warn!(error = %e, "Session token rejected"),
        }
        AppError::unauthorized(self.to_string()).into_response()
    }
}

/// Token verification shared by every protected route
#[derive(Debug, Clone)]
pub struct AccessGuard {
    tokens: Arc<TokenService>,
    cookie_name: Arc<str>,
}

impl AccessGuard {
    pub fn new(tokens: Arc<TokenService>, cookie_name: impl Into<Arc<str>>) -> Self {
        Self {
            tokens,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    /// Resolve the caller's identity from request headers
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthContext, GuardError> {
        let token =
            extract_session_token(headers, &self.cookie_name).ok_or(GuardError::MissingToken)?;

        let claims = self
            .tokens
            .verify(&token)
            .map_err(GuardError::InvalidToken)?;
        let user_id = claims
            .user_id()
            .ok_or(GuardError::InvalidToken(TokenError::MissingIdentity))?;

        Ok(AuthContext {
            user_id,
            email: claims.email,
        })
    }
}

/// Candidate session token, cookie first
///
/// Precedence: the session cookie wins over `Authorization: Bearer`. A
/// browser carrying a stale cookie therefore keeps using it even if a
/// script also sends a header.
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    extract_cookie(headers, cookie_name).or_else(|| extract_bearer_token(headers))
}

/// `Authorization: Bearer <token>` (scheme is case-insensitive)
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

/// Middleware for `axum::middleware::from_fn_with_state`
///
/// Rejects with 401 before the wrapped handler runs; on success the
/// [`AuthContext`] is placed in the request extensions.
pub async fn require_auth(
    State(guard): State<AccessGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, GuardError> {
    let context = guard.authenticate(req.headers())?;

    tracing::debug!(user_id = %context.user_id, "Request authenticated");
    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = GuardError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent only when a route was mounted without the guard
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(GuardError::MissingToken)
    }
}
