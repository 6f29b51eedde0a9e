//! Event image storage
//!
//! Uploaded images are written to a local directory under generated names and
//! referenced from events as `/uploads/<file>`.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::utils::errors::{Result, TurnoutError};
use crate::utils::helpers::{image_extension, IMAGE_EXTENSIONS};

/// URL prefix under which stored images are served
pub const UPLOADS_PREFIX: &str = "/uploads";

/// An image received with an event creation form
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    directory: PathBuf,
}

impl ImageStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory the images live in
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Create the storage directory if needed
    pub async fn ensure_directory(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.directory).await?;
        Ok(())
    }

    /// Store an image and return its public path
    pub async fn save(&self, image: &UploadedImage) -> Result<String> {
        let ext = image_extension(&image.file_name).ok_or_else(|| {
            TurnoutError::validation(format!(
                "Image must be one of: {}",
                IMAGE_EXTENSIONS.join(", ")
            ))
        })?;

        let file_name = format!("{}.{}", Uuid::new_v4(), ext);
        self.ensure_directory().await?;
        tokio::fs::write(self.directory.join(&file_name), &image.bytes).await?;

        debug!(file = %file_name, size = image.bytes.len(), "Stored event image");
        Ok(format!("{}/{}", UPLOADS_PREFIX, file_name))
    }

    /// Remove a previously stored image by its public path. Best effort.
    pub async fn remove(&self, public_path: &str) {
        let Some(file_name) = public_path
            .strip_prefix(UPLOADS_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return;
        };

        if file_name.contains('/') || file_name.contains('\\') || file_name.contains("..") {
            return;
        }

        if let Err(e) = tokio::fs::remove_file(self.directory.join(file_name)).await {
            warn!(file = %file_name, error = %e, "Failed to remove orphaned image");
        }
    }
}
