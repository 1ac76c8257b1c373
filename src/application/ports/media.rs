//! Outbound port for binary media storage

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// An uploaded file, fully read into memory.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Extension of the original file name, lower-cased, if any.
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upload rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Malformed upload response: {0}")]
    InvalidResponse(String),
}

/// Stores a file and hands back a public URL for it.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file: MediaFile) -> Result<String, MediaError>;
}

pub type SharedMediaUploader = Arc<dyn MediaUploader>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        let f = MediaFile::new("Portrait.JPG", None, Bytes::new());
        assert_eq!(f.extension().as_deref(), Some("jpg"));
        assert_eq!(MediaFile::new("blob", None, Bytes::new()).extension(), None);
    }
}
