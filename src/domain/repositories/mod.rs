//! Repository access for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-collection repositories
//! - `DomainResult`: standard result type for domain operations

use super::image::ImageRepository;
use super::review::ReviewRepository;
use super::stylist::{ServiceRepository, StylistRepository};
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Built once at startup around a single connection pool and injected into
/// every application service:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let stylist = repos.stylists().find_by_id(id).await?;
///     let services = repos.services().find_by_stylist(id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn stylists(&self) -> &dyn StylistRepository;
    fn services(&self) -> &dyn ServiceRepository;
    fn images(&self) -> &dyn ImageRepository;
    fn reviews(&self) -> &dyn ReviewRepository;
}
