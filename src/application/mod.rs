//! Application layer - use-case services
//!
//! Each service receives its repositories (and, for uploads, the media
//! port) at construction and is shared behind an `Arc` by the handlers.

pub mod identity;
pub mod ports;
pub mod stylists;

#[cfg(test)]
pub(crate) mod testing;

pub use identity::{AuthResult, IdentityService};
pub use ports::{MediaError, MediaFile, MediaUploader, SharedMediaUploader};
pub use stylists::{ImageService, ProfileService, ReviewService};
