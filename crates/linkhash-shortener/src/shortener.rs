use crate::error::Result;
use async_trait::async_trait;
use linkhash_core::Slug;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates `link`, stores it and returns the slug it was filed under.
    async fn shorten(&self, link: &str) -> Result<Slug>;

    /// Returns the link stored under `slug`.
    async fn resolve(&self, slug: &Slug) -> Result<String>;

    /// Deletes the link stored under `slug`.
    async fn delete(&self, slug: &Slug) -> Result<()>;
}
