//! Application ports (hexagonal architecture boundaries)
//!
//! Outbound collaborators the use-case services call through a trait so
//! the transport behind them can be swapped or stubbed.

pub mod media;

pub use media::{MediaError, MediaFile, MediaUploader, SharedMediaUploader};
