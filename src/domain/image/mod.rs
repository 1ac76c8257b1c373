//! Image entity (portfolio pictures attached to a stylist)

pub mod model;
pub mod repository;

pub use model::{Image, ImageKind};
pub use repository::ImageRepository;
