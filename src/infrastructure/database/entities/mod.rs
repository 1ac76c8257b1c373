//! Database entities module

pub mod image;
pub mod review;
pub mod service;
pub mod stylist;
pub mod user;

pub use image::Entity as Image;
pub use review::Entity as Review;
pub use service::Entity as Service;
pub use stylist::Entity as Stylist;
pub use user::Entity as User;
