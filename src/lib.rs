//! # Stylist Service
//!
//! REST backend for a marketplace connecting clients with stylists: stylist
//! profiles with their services, portfolio images and peer reviews.
//!
//! ## Architecture
//!
//! - **domain**: entities, the read-time `StylistProfile` aggregate, repository traits
//! - **application**: use-case services and the outbound media port
//! - **infrastructure**: SeaORM storage, JWT/bcrypt, media upload adapters
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: errors, shutdown signal, clock helper

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiContext};
