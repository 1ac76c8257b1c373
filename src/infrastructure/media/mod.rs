//! Media upload adapters behind the `MediaUploader` port

pub mod cloudinary;
pub mod local;

use std::sync::Arc;

use tracing::info;

use crate::application::ports::SharedMediaUploader;
use crate::config::{MediaBackend, MediaConfig};

pub use cloudinary::CloudinaryUploader;
pub use local::LocalMediaStore;

/// Build the uploader selected by `media.backend`.
pub fn build_uploader(config: &MediaConfig) -> SharedMediaUploader {
    match config.backend {
        MediaBackend::Local => {
            info!(dir = %config.local_dir, "Media backend: local disk");
            Arc::new(LocalMediaStore::new(
                config.local_dir.clone(),
                config.public_base_url.clone(),
            ))
        }
        MediaBackend::Cloudinary => {
            info!(cloud = %config.cloudinary_cloud_name, "Media backend: Cloudinary");
            Arc::new(CloudinaryUploader::from_config(config))
        }
    }
}
