use crate::error::{Result, ServiceError};
use crate::shortener::Shortener;
use async_trait::async_trait;
use linkhash_core::{LinkStore, Slug};
use linkhash_generator::SlugGenerator;
use std::sync::Arc;
use tracing::{debug, info};

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`LinkStore`] and a [`SlugGenerator`] to handle:
/// - link scheme validation
/// - slug derivation and commit, retrying on a lost insert race
/// - lookups and deletes
#[derive(Debug)]
pub struct LinkService<S: ?Sized> {
    generator: SlugGenerator,
    store: Arc<S>,
}

impl<S: ?Sized> Clone for LinkService<S> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator,
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: LinkStore + ?Sized> LinkService<S> {
    pub fn new(store: Arc<S>, generator: SlugGenerator) -> Self {
        Self { generator, store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Accepts absolute `http` and `https` links only.
    fn validate_link(link: &str) -> Result<()> {
        if link.is_empty() {
            return Err(ServiceError::InvalidUrl("link cannot be empty".to_string()));
        }

        let Some((scheme, rest)) = link.split_once("://") else {
            return Err(ServiceError::InvalidUrl(format!(
                "link must have a scheme and host: {link}"
            )));
        };

        let scheme = scheme.to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ServiceError::InvalidUrl(format!(
                "link scheme must be http or https: {scheme}"
            )));
        }

        if rest.is_empty() {
            return Err(ServiceError::InvalidUrl(format!(
                "link must have a host: {link}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<S: LinkStore + ?Sized> Shortener for LinkService<S> {
    async fn shorten(&self, link: &str) -> Result<Slug> {
        Self::validate_link(link)?;

        let slug = self.generator.claim(link, self.store.as_ref()).await?;
        info!(%slug, link, "link shortened");
        Ok(slug)
    }

    async fn resolve(&self, slug: &Slug) -> Result<String> {
        debug!(%slug, "resolving slug");
        Ok(self.store.get(slug).await?)
    }

    async fn delete(&self, slug: &Slug) -> Result<()> {
        self.store.remove(slug).await?;
        info!(%slug, "link deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkhash_generator::GeneratorSettings;
    use linkhash_storage::{MemoryStore, SqliteSettings, SqliteStore};
    use tempfile::TempDir;

    fn test_service() -> LinkService<MemoryStore> {
        let generator = SlugGenerator::new(GeneratorSettings::default()).unwrap();
        LinkService::new(Arc::new(MemoryStore::new()), generator)
    }

    #[tokio::test]
    async fn shorten_returns_digest_prefix() {
        let service = test_service();

        let slug = service.shorten("https://www.google.com").await.unwrap();
        assert_eq!(slug.as_str(), "rGu2ae");
    }

    #[tokio::test]
    async fn shorten_accepts_uppercase_scheme() {
        let service = test_service();

        assert!(service.shorten("HTTP://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn shorten_rejects_invalid_links() {
        let service = test_service();

        for link in [
            "",
            "not-a-valid-url",
            "ftp://example.com",
            "https://",
            "javascript://alert(1)",
        ] {
            let err = service.shorten(link).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidUrl(_)), "{link:?}");
        }

        assert!(service.store().is_empty());
    }

    #[tokio::test]
    async fn resubmitting_a_link_gets_a_longer_slug() {
        let service = test_service();

        let first = service.shorten("https://go.dev").await.unwrap();
        let second = service.shorten("https://go.dev").await.unwrap();

        assert_eq!(first.as_str(), "bn9Y9r");
        assert_eq!(second.as_str(), "bn9Y9rh");
    }

    #[tokio::test]
    async fn resolve_existing_link() {
        let service = test_service();

        let slug = service.shorten("https://example.com").await.unwrap();

        assert_eq!(service.resolve(&slug).await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn resolve_nonexistent_slug() {
        let service = test_service();

        let err = service
            .resolve(&Slug::new("nonexistent").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::NotFound("nonexistent".to_string()));
    }

    #[tokio::test]
    async fn delete_existing_link() {
        let service = test_service();

        let slug = service.shorten("https://example.com").await.unwrap();
        service.delete(&slug).await.unwrap();

        assert!(matches!(
            service.resolve(&slug).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_nonexistent_link() {
        let service = test_service();

        let err = service
            .delete(&Slug::new("nonexistent").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn works_over_a_trait_object() {
        let store: Arc<dyn LinkStore> = Arc::new(MemoryStore::new());
        let service = LinkService::new(
            store,
            SlugGenerator::new(GeneratorSettings::default()).unwrap(),
        );

        let slug = service.shorten("https://www.google.com").await.unwrap();
        assert_eq!(service.resolve(&slug).await.unwrap(), "https://www.google.com");
    }

    #[tokio::test]
    async fn storage_failures_surface_as_storage_errors() {
        let dir = TempDir::new().unwrap();
        let settings = SqliteSettings::builder()
            .path(dir.path().join("links.db"))
            .build();
        let store = Arc::new(SqliteStore::connect(&settings).await.unwrap());
        let service = LinkService::new(
            Arc::clone(&store),
            SlugGenerator::new(GeneratorSettings::default()).unwrap(),
        );

        store.disconnect().await;

        let err = service.shorten("https://example.com").await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }
}
