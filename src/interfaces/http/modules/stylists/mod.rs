//! Stylists module - profiles, reviews and portfolio images

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
