//! Review aggregate

pub mod model;
pub mod repository;

pub use model::{NewReview, Review};
pub use repository::ReviewRepository;
