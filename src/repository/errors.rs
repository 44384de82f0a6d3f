use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced record does not exist.
    #[error("record not found")]
    NotFound,
    /// Stored or supplied data violates a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    ConnectionError(#[from] PoolError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
