//! Identity module - registration & authentication
//!
//! Issues the session tokens the stylist flows consume.

pub mod service;

pub use service::{AuthResult, IdentityService};
