//! Get User Use Case

use std::sync::Arc;

use platform::guard::AuthContext;

use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Public view of the caller's account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

pub struct GetUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// 404 when the token outlived its account
    pub async fn execute(&self, auth: &AuthContext) -> AuthResult<UserProfile> {
        let user = self
            .user_repo
            .find_by_id(&auth.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(UserProfile {
            id: user.user_id.to_string(),
            name: user.name.to_string(),
            email: user.email.into_inner(),
        })
    }
}
