use crate::config::{BackendKind, StoreConfig};
use crate::memory::MemoryStore;
use crate::sqlite::SqliteStore;
use async_trait::async_trait;
use linkhash_core::{LinkRecord, LinkStore, Result, Slug};
use tracing::info;

/// The backend chosen at startup.
///
/// Dispatch happens by matching on the variant; callers only ever see the
/// [`LinkStore`] contract.
#[derive(Debug)]
pub enum Store {
    Ephemeral(MemoryStore),
    Persistent(SqliteStore),
}

macro_rules! dispatch {
    ($self:ident, $store:ident => $call:expr) => {
        match $self {
            Store::Ephemeral($store) => $call,
            Store::Persistent($store) => $call,
        }
    };
}

impl Store {
    /// Establishes the configured backend.
    ///
    /// Fails with `Connection` or `Schema` when the persistent backend cannot
    /// be opened; the process should not serve traffic in that case.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        info!(backend = %config.kind(), "database connect initialized");

        let store = match config {
            StoreConfig::Memory => Store::Ephemeral(MemoryStore::new()),
            StoreConfig::Sqlite(settings) => Store::Persistent(SqliteStore::connect(settings).await?),
        };

        info!(backend = %store.kind(), "database connect complete");
        Ok(store)
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Store::Ephemeral(_) => BackendKind::Memory,
            Store::Persistent(_) => BackendKind::Sqlite,
        }
    }
}

#[async_trait]
impl LinkStore for Store {
    async fn is_available(&self, slug: &Slug) -> Result<bool> {
        dispatch!(self, store => store.is_available(slug).await)
    }

    async fn insert(&self, slug: &Slug, target: &str) -> Result<()> {
        dispatch!(self, store => store.insert(slug, target).await)
    }

    async fn remove(&self, slug: &Slug) -> Result<()> {
        dispatch!(self, store => store.remove(slug).await)
    }

    async fn get(&self, slug: &Slug) -> Result<String> {
        dispatch!(self, store => store.get(slug).await)
    }

    async fn record(&self, slug: &Slug) -> Result<LinkRecord> {
        dispatch!(self, store => store.record(slug).await)
    }

    async fn slugs(&self) -> Result<Vec<Slug>> {
        dispatch!(self, store => store.slugs().await)
    }

    async fn disconnect(&self) {
        info!(backend = %self.kind(), "database disconnecting");
        dispatch!(self, store => store.disconnect().await);
        info!(backend = %self.kind(), "database disconnect complete");
    }
}
