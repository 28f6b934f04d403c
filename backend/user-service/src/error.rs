/// Error types for user-service
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("user with email {0} already exists")]
    AlreadyExists(String),

    #[error("user {0} not found")]
    NotFound(i32),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
