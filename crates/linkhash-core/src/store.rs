use crate::error::Result;
use crate::slug::Slug;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Primary key, immutable once assigned.
    pub slug: Slug,
    /// The link that was shortened, stored verbatim.
    pub target: String,
    /// When the store accepted the record.
    pub created_at: Timestamp,
}

/// Keyed storage for slug to link mappings.
///
/// Every implementation follows the same locking discipline: `insert` and
/// `remove` run with exclusive access for their whole duration, while the
/// read operations may overlap each other but never a mutation. Callers can
/// therefore treat every backend the same way.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Returns `true` if no live record currently uses `slug`.
    async fn is_available(&self, slug: &Slug) -> Result<bool>;

    /// Stores `target` under `slug`.
    ///
    /// Uniqueness is re-checked atomically at commit time, so a prior
    /// [`is_available`](LinkStore::is_available) result is never trusted.
    /// Returns `Err(DuplicateSlug)` if the slug is taken.
    async fn insert(&self, slug: &Slug, target: &str) -> Result<()>;

    /// Deletes the record for `slug`. Returns `Err(NotFound)` on a miss.
    async fn remove(&self, slug: &Slug) -> Result<()>;

    /// Returns the target stored under `slug`. Returns `Err(NotFound)` on a miss.
    async fn get(&self, slug: &Slug) -> Result<String>;

    /// Returns the whole record stored under `slug`.
    async fn record(&self, slug: &Slug) -> Result<LinkRecord>;

    /// Lists every live slug in ascending order.
    async fn slugs(&self) -> Result<Vec<Slug>>;

    /// Releases backend resources. Calling it more than once is harmless.
    async fn disconnect(&self);
}
