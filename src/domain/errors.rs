// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Input violates a value-object or entity rule.
    #[error("validation error: {0}")]
    Validation(String),
    /// A uniqueness rule (slug, email, username) rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Storage failed for reasons unrelated to the request's content.
    #[error("persistence error: {0}")]
    Persistence(String),
}
