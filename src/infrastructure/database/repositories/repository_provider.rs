//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    ImageRepository, RepositoryProvider, ReviewRepository, ServiceRepository, StylistRepository,
    UserRepository,
};

use super::image_repository::SeaOrmImageRepository;
use super::review_repository::SeaOrmReviewRepository;
use super::service_repository::SeaOrmServiceRepository;
use super::stylist_repository::SeaOrmStylistRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-collection repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let stylist = repos.stylists().find_by_user_id(&claims.sub).await?;
/// let services = repos.services().find_by_stylist(&stylist.id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    stylists: SeaOrmStylistRepository,
    services: SeaOrmServiceRepository,
    images: SeaOrmImageRepository,
    reviews: SeaOrmReviewRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            stylists: SeaOrmStylistRepository::new(db.clone()),
            services: SeaOrmServiceRepository::new(db.clone()),
            images: SeaOrmImageRepository::new(db.clone()),
            reviews: SeaOrmReviewRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn stylists(&self) -> &dyn StylistRepository {
        &self.stylists
    }

    fn services(&self) -> &dyn ServiceRepository {
        &self.services
    }

    fn images(&self) -> &dyn ImageRepository {
        &self.images
    }

    fn reviews(&self) -> &dyn ReviewRepository {
        &self.reviews
    }
}
