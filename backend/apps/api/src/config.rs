//! Server configuration from the environment
//!
//! Read once at startup, after `.env` has been loaded. Missing required
//! values are fatal; optional ones fall back to defaults with a log line.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use platform::cookie::CookieConfig;
use platform::token::TokenService;
use story::StoryConfig;
use story::application::config::{
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MEDIA_URL_PREFIX, DEFAULT_PLACEHOLDER_IMAGE_URL,
};
use tracing::{info, warn};

use crate::app::HttpSettings;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

pub struct ApiConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub upload_dir: PathBuf,
    pub placeholder_image_url: String,
    pub max_upload_bytes: usize,
    pub cookie_secure: bool,
    jwt_secret: Option<String>,
    password_pepper: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let jwt_secret = var("JWT_SECRET");
        if jwt_secret.is_none() && !cfg!(debug_assertions) {
            bail!("JWT_SECRET must be set in release builds");
        }

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                var("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            frontend_origins,
            upload_dir: var("UPLOAD_DIR")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            placeholder_image_url: var("PLACEHOLDER_IMAGE_URL")
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE_URL.to_string()),
            max_upload_bytes: parse_or(
                "MAX_UPLOAD_BYTES",
                var("MAX_UPLOAD_BYTES"),
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            cookie_secure: parse_or("COOKIE_SECURE", var("COOKIE_SECURE"), !cfg!(debug_assertions))?,
            jwt_secret,
            password_pepper: var("PASSWORD_PEPPER"),
        })
    }

    /// Token service for the configured secret
    ///
    /// Debug builds without `JWT_SECRET` get a random secret, so sessions do
    /// not survive a restart.
    pub fn token_service(&self) -> TokenService {
        match &self.jwt_secret {
            Some(secret) => TokenService::from_secret(secret.as_bytes()),
            None => {
                warn!("JWT_SECRET not set, using a random secret for this process");
                TokenService::ephemeral()
            }
        }
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            cookie: CookieConfig {
                secure: self.cookie_secure,
                ..CookieConfig::default()
            },
            password_pepper: self
                .password_pepper
                .as_ref()
                .map(|pepper| pepper.as_bytes().to_vec()),
        }
    }

    pub fn story_config(&self) -> StoryConfig {
        StoryConfig {
            placeholder_image_url: self.placeholder_image_url.clone(),
            media_url_prefix: DEFAULT_MEDIA_URL_PREFIX.to_string(),
            max_upload_bytes: self.max_upload_bytes,
        }
    }

    pub fn http_settings(&self) -> HttpSettings {
        let cors_origins = self
            .frontend_origins
            .iter()
            .filter_map(|origin| {
                if origin == "*" {
                    warn!("Ignoring wildcard CORS origin; credentials are allowed");
                    return None;
                }
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin"))
                    .ok()
            })
            .collect();

        HttpSettings {
            cors_origins,
            upload_dir: self.upload_dir.clone(),
            media_url_prefix: DEFAULT_MEDIA_URL_PREFIX.to_string(),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {key} value '{raw}': {e}")),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
