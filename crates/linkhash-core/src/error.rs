use thiserror::Error;

/// Result type for link store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Typed failures surfaced by a [`LinkStore`](crate::LinkStore).
///
/// `Connection`, `Schema` and `Config` are setup failures and mean the
/// process must not serve traffic. `DuplicateSlug` and `NotFound` are
/// expected outcomes a caller is meant to handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Connection(String),
    #[error("schema setup failed: {0}")]
    Schema(String),
    #[error("slug already exists: {0}")]
    DuplicateSlug(String),
    #[error("slug not found: {0}")]
    NotFound(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors raised while building core values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
}
