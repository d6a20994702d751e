//! Media Rules
//!
//! One capability check decides whether an image is acceptable, for both
//! upload (declared content type, falling back to the file name) and
//! delete (file name only): [`resolve_media_type`].

use std::fmt;

use chrono::Utc;
use nid::Nanoid;

use crate::error::{StoryError, StoryResult};

/// Accepted image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Png,
    Jpeg,
    Gif,
}

impl MediaType {
    /// `image/png`, `image/jpeg`, `image/jpg`, `image/gif` (parameters ignored)
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or_default().trim();

        match essence.to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Extension without the dot, any case
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        extension_of(filename).and_then(Self::from_extension)
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }

    pub fn canonical_extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
        }
    }
}

/// Resolve the media type of an image
///
/// The declared content type decides when present (so `text/plain` named
/// `photo.png` is rejected); otherwise the file name extension does.
pub fn resolve_media_type(content_type: Option<&str>, filename: Option<&str>) -> Option<MediaType> {
    match content_type.map(str::trim).filter(|ct| !ct.is_empty()) {
        Some(declared) => MediaType::from_mime(declared),
        None => filename.and_then(MediaType::from_filename),
    }
}

pub fn is_allowed_media_type(content_type: Option<&str>, filename: Option<&str>) -> bool {
    resolve_media_type(content_type, filename).is_some()
}

fn extension_of(filename: &str) -> Option<&str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    (!stem.is_empty() && !ext.is_empty()).then_some(ext)
}

// ============================================================================
// Stored Filename
// ============================================================================

/// Name of a file in the upload directory
///
/// Always a single path component with an allowed image extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredFilename(String);

impl StoredFilename {
    /// Fresh `<epoch-ms>-<nanoid>.<ext>` name for an upload
    ///
    /// Keeps the original extension when it is an allowed one, otherwise
    /// uses the canonical extension of `media_type`.
    pub fn generate(media_type: MediaType, original_name: Option<&str>) -> Self {
        let ext = original_name
            .and_then(extension_of)
            .filter(|ext| MediaType::from_extension(ext).is_some())
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| media_type.canonical_extension().to_string());

        let id: Nanoid = Nanoid::new();
        Self(format!("{}-{}.{}", Utc::now().timestamp_millis(), id.as_str(), ext))
    }

    /// Validate a client-supplied name (delete-image path segment)
    pub fn parse(raw: &str) -> StoryResult<Self> {
        let is_single_component = !raw.is_empty()
            && !raw.starts_with('.')
            && !raw.contains(['/', '\\', '\0'])
            && !raw.contains("..");

        if !is_single_component {
            return Err(StoryError::InvalidFilename);
        }

        if resolve_media_type(None, Some(raw)).is_none() {
            return Err(StoryError::InvalidMediaType);
        }

        Ok(Self(raw.to_string()))
    }

    /// Stored file behind an image URL such as `/uploads/<name>`
    ///
    /// `None` for URLs that do not end in a valid stored name (external
    /// images, the placeholder).
    pub fn from_image_url(image_url: &str, url_prefix: &str) -> Option<Self> {
        // Absolute URLs are reduced to their path
        let path = match image_url.split_once("://") {
            Some((_, rest)) => &rest[rest.find('/')?..],
            None => image_url,
        };
        let path = path.split(['?', '#']).next().unwrap_or_default();

        let prefix = format!("{}/", url_prefix.trim_end_matches('/'));
        let name = path.strip_prefix(&prefix)?;
        Self::parse(name).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn media_type(&self) -> Option<MediaType> {
        MediaType::from_filename(&self.0)
    }

    /// Public URL under the static route
    pub fn url(&self, url_prefix: &str) -> String {
        format!("{}/{}", url_prefix.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for StoredFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
