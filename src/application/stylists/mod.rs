//! Stylist use-cases: profile read/create, reviews and portfolio images.

pub mod images;
pub mod profile;
pub mod review;

pub use images::ImageService;
pub use profile::ProfileService;
pub use review::ReviewService;
