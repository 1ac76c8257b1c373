//! Portfolio image uploader

use std::sync::Arc;

use tracing::{error, info};

use crate::application::ports::{MediaFile, MediaUploader};
use crate::domain::{DomainError, DomainResult, Image, RepositoryProvider, Stylist, UserRole};

pub struct ImageService {
    repos: Arc<dyn RepositoryProvider>,
    uploader: Arc<dyn MediaUploader>,
}

impl ImageService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, uploader: Arc<dyn MediaUploader>) -> Self {
        Self { repos, uploader }
    }

    /// The caller's own profile, if the caller is a stylist that has one.
    ///
    /// Runs before any file is read so a rejected caller never uploads.
    pub async fn resolve_upload_target(&self, caller_id: &str) -> DomainResult<Stylist> {
        if self
            .repos
            .users()
            .find_by_id_and_role(caller_id, UserRole::Stylist)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation("user is not a stylist".into()));
        }

        self.repos
            .stylists()
            .find_by_user_id(caller_id)
            .await?
            .ok_or_else(|| {
                DomainError::Validation("please update your details before uploading image".into())
            })
    }

    /// Upload every file in order, then record one image per URL.
    ///
    /// The first upload failure aborts the request; files already uploaded
    /// stay with the media backend.
    pub async fn attach_images(
        &self,
        stylist: &Stylist,
        files: Vec<MediaFile>,
    ) -> DomainResult<Vec<Image>> {
        if files.is_empty() {
            return Err(DomainError::Payload("no images provided".into()));
        }

        let mut images = Vec::with_capacity(files.len());
        for file in files {
            let name = file.file_name.clone();
            let url = self.uploader.upload(file).await.map_err(|e| {
                error!(stylist_id = %stylist.id, file = %name, error = %e, "Media upload failed");
                DomainError::Upload(e.to_string())
            })?;
            images.push(Image::new_stylist_image(url, &stylist.id));
        }

        self.repos.images().insert_many(images.clone()).await?;
        metrics::counter!("stylist_images_uploaded_total").increment(images.len() as u64);
        info!(stylist_id = %stylist.id, count = images.len(), "Stylist images uploaded");

        Ok(images)
    }
}
