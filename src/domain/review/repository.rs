//! Review repository interface

use async_trait::async_trait;

use super::Review;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a review. A second review by the same reviewer is a `Conflict`.
    async fn insert(&self, review: &Review) -> DomainResult<()>;

    /// Any review written by `user_id`, regardless of target
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<Review>>;
}
