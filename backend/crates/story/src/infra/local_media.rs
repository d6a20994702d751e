//! Local Filesystem Media Store
//!
//! Uploaded images live flat in one directory, which the API also serves
//! statically. Names are validated [`StoredFilename`]s, so joining them onto
//! the root never leaves it.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::media::StoredFilename;
use crate::domain::repository::MediaStore;
use crate::error::StoryResult;

#[derive(Clone, Debug)]
pub struct DiskMediaStore {
    root: PathBuf,
}

impl DiskMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it is missing
    pub async fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    fn path_of(&self, filename: &StoredFilename) -> PathBuf {
        self.root.join(filename.as_str())
    }
}

impl MediaStore for DiskMediaStore {
    async fn save(&self, filename: &StoredFilename, bytes: &[u8]) -> StoryResult<()> {
        self.ensure_root().await?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path_of(filename))
            .await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        Ok(())
    }

    async fn remove(&self, filename: &StoredFilename) -> StoryResult<bool> {
        match fs::remove_file(self.path_of(filename)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
