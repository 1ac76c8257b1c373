use thiserror::Error;

/// Errors produced by domain and application code.
///
/// The string payload of the caller-facing variants (`NotFound`, `Validation`,
/// `Conflict`, `Unauthorized`, `Payload`) is safe to return to the client.
/// The internal variants (`InvalidId`, `Database`, `Upload`) carry detail that
/// only goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Payload(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Upload failed: {0}")]
    Upload(String),
}

impl DomainError {
    /// Whether the error is an internal failure that must not be echoed to the caller.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidId(_) | DomainError::Database(_) | DomainError::Upload(_)
        )
    }
}
