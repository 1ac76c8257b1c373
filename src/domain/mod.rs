//! Domain layer
//!
//! Entities, the read-time `StylistProfile` aggregate and the repository
//! interfaces the application services are written against.

pub mod image;
pub mod repositories;
pub mod review;
pub mod stylist;
pub mod user;

pub use image::{Image, ImageKind, ImageRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use review::{NewReview, Review, ReviewRepository};
pub use stylist::{
    NewService, Service, ServiceRepository, Stylist, StylistProfile, StylistRepository,
};
pub use user::{User, UserRepository, UserRole};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
