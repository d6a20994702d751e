//! Travel Journal API
//!
//! Wires the auth and story contexts into one HTTP surface:
//! - `/api/users/*` - identity and story routes
//! - `/uploads/*` - uploaded images, served from the upload directory
//! - `/` - liveness
//!
//! Startup errors use `anyhow`; request errors use `kernel::error::AppError`.

pub mod app;
pub mod config;
pub mod owners;

pub use app::{HttpSettings, build_router};
pub use config::ApiConfig;
pub use owners::OwnerDirectory;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
