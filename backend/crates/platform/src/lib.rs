//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations used by the `auth` and `story` contexts:
//! - Password hashing (Argon2id, NIST SP 800-63B policy)
//! - Session cookie building and extraction
//! - Signed session tokens (HS256 JWT)
//! - The access guard middleware that turns a token into an [`guard::AuthContext`]

pub mod cookie;
pub mod guard;
pub mod password;
pub mod token;
