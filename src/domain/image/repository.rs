//! Image repository interface

use async_trait::async_trait;

use super::Image;
use crate::domain::DomainResult;

#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Insert a batch of images
    async fn insert_many(&self, images: Vec<Image>) -> DomainResult<()>;

    async fn find_by_stylist(&self, stylist_id: &str) -> DomainResult<Vec<Image>>;
}
