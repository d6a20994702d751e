//! User Entity
//!
//! Account record: who the person is and how they prove it.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::UserPassword,
};

/// User entity
///
/// Created on registration, read on login and profile fetch. Nothing in the
/// exposed surface updates or deletes it.
#[derive(Debug, Clone)]
pub struct User {
    /// UUID v4 identifier, carried in session tokens as `userid`
    pub user_id: UserId,
    pub name: DisplayName,
    /// Unique, compared exactly as stored
    pub email: Email,
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: DisplayName, email: Email, password: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            name,
            email,
            password,
            created_at: Utc::now(),
        }
    }
}
