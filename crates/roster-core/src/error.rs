//! Store-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// A missing record is never one of these; lookups return `Option`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
