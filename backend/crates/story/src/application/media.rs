//! Image Upload / Delete Use Cases

use std::sync::Arc;

use crate::application::config::StoryConfig;
use crate::domain::media::{StoredFilename, resolve_media_type};
use crate::domain::repository::MediaStore;
use crate::error::{StoryError, StoryResult};

/// The `image` part of an upload request
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

pub struct UploadImageUseCase<M>
where
    M: MediaStore,
{
    media: Arc<M>,
    config: Arc<StoryConfig>,
}

impl<M> UploadImageUseCase<M>
where
    M: MediaStore,
{
    pub fn new(media: Arc<M>, config: Arc<StoryConfig>) -> Self {
        Self { media, config }
    }

    /// Store the image and return the URL it is served under
    pub async fn execute(&self, upload: ImageUpload) -> StoryResult<String> {
        let original_name = upload
            .filename
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(StoryError::NoFilename)?;

        let media_type = resolve_media_type(upload.content_type.as_deref(), Some(original_name))
            .ok_or(StoryError::InvalidMediaType)?;

        let filename = StoredFilename::generate(media_type, Some(original_name));
        self.media.save(&filename, &upload.bytes).await?;

        tracing::info!(
            filename = %filename,
            media_type = media_type.mime(),
            size = upload.bytes.len(),
            "Image uploaded"
        );

        Ok(filename.url(&self.config.media_url_prefix))
    }
}

pub struct DeleteImageUseCase<M>
where
    M: MediaStore,
{
    media: Arc<M>,
}

impl<M> DeleteImageUseCase<M>
where
    M: MediaStore,
{
    pub fn new(media: Arc<M>) -> Self {
        Self { media }
    }

    pub async fn execute(&self, raw_filename: &str) -> StoryResult<()> {
        let filename = StoredFilename::parse(raw_filename)?;

        if !self.media.remove(&filename).await? {
            return Err(StoryError::ImageNotFound);
        }

        tracing::info!(filename = %filename, "Image deleted");

        Ok(())
    }
}
