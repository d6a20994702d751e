//! Shared Kernel
//!
//! Vocabulary shared by every bounded context of the journal backend:
//! - The unified [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - Typed identifiers for identities and stories
//!
//! Only things whose meaning is identical across contexts belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
