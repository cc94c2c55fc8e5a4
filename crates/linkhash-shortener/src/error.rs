use linkhash_core::{CoreError, StoreError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
    #[error("slug not found: {0}")]
    NotFound(String),
    #[error("slug already exists: {0}")]
    Conflict(String),
    #[error("storage error: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(slug) => Self::NotFound(slug),
            StoreError::DuplicateSlug(slug) => Self::Conflict(slug),
            other => Self::Storage(other),
        }
    }
}

impl From<CoreError> for ServiceError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidSlug(message) => Self::InvalidSlug(message),
        }
    }
}
