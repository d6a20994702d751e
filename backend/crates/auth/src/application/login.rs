//! Login Use Case
//!
//! Verifies email + password and issues a session token.

use std::sync::Arc;

use kernel::id::UserId;
use platform::token::{SessionClaims, TokenService};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    /// Unknown email is 404 and a wrong password is 401
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        // Anything that is not even an address cannot be registered
        let email = Email::new(input.email).map_err(|_| AuthError::UserNotFound)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let attempt = RawPassword::attempt(input.password);
        if !user.password.verify(&attempt, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&SessionClaims::new(user.email.as_str(), &user.user_id))?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id,
            token,
        })
    }
}
