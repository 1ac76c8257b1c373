//! Local-disk media store, served back by the router under `/media`

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{MediaError, MediaFile, MediaUploader};

pub struct LocalMediaStore {
    dir: PathBuf,
    public_base_url: String,
}

impl LocalMediaStore {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MediaUploader for LocalMediaStore {
    async fn upload(&self, file: MediaFile) -> Result<String, MediaError> {
        fs::create_dir_all(&self.dir).await?;

        // Stored names never reuse the client's file name.
        let name = match file.extension() {
            Some(ext) if ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
                format!("{}.{}", Uuid::new_v4(), ext)
            }
            _ => Uuid::new_v4().to_string(),
        };

        fs::write(self.dir.join(&name), &file.bytes).await?;
        Ok(format!("{}/{}", self.public_base_url, name))
    }
}
