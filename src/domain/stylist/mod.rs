//! Stylist aggregate
//!
//! A `Stylist` is the aggregate root. Its `Service`s (and `Image`s, see
//! [`crate::domain::image`]) are stored separately and point back at it
//! through `stylist_id`; the full `StylistProfile` only exists at read time.

pub mod model;
pub mod repository;

pub use model::{NewService, Service, Stylist, StylistProfile};
pub use repository::{ServiceRepository, StylistRepository};
