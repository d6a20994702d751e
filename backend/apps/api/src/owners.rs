//! Identity Store adapter for the story context
//!
//! New stories copy their owner's name and email; this resolves them from
//! the auth repository.

use auth::UserRepository;
use kernel::id::UserId;
use story::{Owner, OwnerRepository, StoryError, StoryResult};

#[derive(Clone, Debug)]
pub struct OwnerDirectory<U> {
    users: U,
}

impl<U> OwnerDirectory<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }
}

impl<U> OwnerRepository for OwnerDirectory<U>
where
    U: UserRepository + Sync,
{
    async fn find_owner(&self, user_id: &UserId) -> StoryResult<Option<Owner>> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| StoryError::Internal(format!("Owner lookup failed: {e}")))?;

        Ok(user.map(|user| Owner {
            name: user.name.as_str().to_string(),
            email: user.email.into_inner(),
        }))
    }
}
