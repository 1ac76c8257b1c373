//! Stylist and service repository interfaces

use async_trait::async_trait;

use super::{Service, Stylist};
use crate::domain::DomainResult;

#[async_trait]
pub trait StylistRepository: Send + Sync {
    /// Insert a new profile. A second profile for the same user is a `Conflict`.
    async fn insert(&self, stylist: &Stylist) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Stylist>>;

    /// Find the profile owned by `user_id`
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<Stylist>>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Insert every service independently.
    ///
    /// A failing row does not stop the rest; rows already written stay written.
    /// Returns the number inserted, or an error describing the failures.
    async fn insert_many_unordered(&self, services: Vec<Service>) -> DomainResult<usize>;

    async fn find_by_stylist(&self, stylist_id: &str) -> DomainResult<Vec<Service>>;
}
