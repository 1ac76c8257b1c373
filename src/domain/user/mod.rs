//! User aggregate
//!
//! Users are owned by the identity flow; the stylist flows only read them
//! to check roles.

pub mod model;
pub mod repository;

pub use model::{User, UserRole};
pub use repository::UserRepository;
