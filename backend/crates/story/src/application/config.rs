//! Application Configuration
//!
//! Configuration for the Story application layer.

/// Image used by edit-story when no `imageUrl` is sent
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str =
    "http://localhost:3000/assets/pexels-stywo-1261728.jpg";

/// Route the upload directory is served under
pub const DEFAULT_MEDIA_URL_PREFIX: &str = "/uploads";

/// 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Story application configuration
#[derive(Debug, Clone)]
pub struct StoryConfig {
    pub placeholder_image_url: String,
    /// Prefix of the URLs returned by upload-image
    pub media_url_prefix: String,
    /// Body limit for upload-image
    pub max_upload_bytes: usize,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_string(),
            media_url_prefix: DEFAULT_MEDIA_URL_PREFIX.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
