//! Database repository implementations
//!
//! Per-collection SeaORM repositories + unified RepositoryProvider.

pub mod image_repository;
pub mod repository_provider;
pub mod review_repository;
pub mod service_repository;
pub mod stylist_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Whether the error is a unique-index violation.
pub(crate) fn is_unique_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("duplicate")
}
