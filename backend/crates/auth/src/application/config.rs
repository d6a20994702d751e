//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Session cookie attributes (name defaults to `token`)
    pub cookie: CookieConfig,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie: CookieConfig {
                secure: false,
                ..CookieConfig::default()
            },
            ..Default::default()
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
