use async_trait::async_trait;
use jiff::Timestamp;
use linkhash_core::{LinkRecord, LinkStore, MonotonicClock, Result, Slug, StoreError};
use parking_lot::RwLock;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// In-memory storage entry for a link.
#[derive(Debug, Clone)]
struct Entry {
    target: String,
    created_at: Timestamp,
}

impl Entry {
    fn into_record(self, slug: &Slug) -> LinkRecord {
        LinkRecord {
            slug: slug.clone(),
            target: self.target,
            created_at: self.created_at,
        }
    }
}

/// Ephemeral implementation of [`LinkStore`].
///
/// The whole table sits behind one reader/writer lock. `insert` performs its
/// existence check and write under a single write guard, so two racing
/// inserts for the same slug cannot both succeed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<HashMap<Slug, Entry>>,
    clock: MonotonicClock,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn is_available(&self, slug: &Slug) -> Result<bool> {
        let available = !self.table.read().contains_key(slug);
        debug!(%slug, available, "checked slug availability");
        Ok(available)
    }

    async fn insert(&self, slug: &Slug, target: &str) -> Result<()> {
        let mut table = self.table.write();

        match table.entry(slug.clone()) {
            MapEntry::Occupied(_) => {
                warn!(%slug, "slug already exists");
                Err(StoreError::DuplicateSlug(slug.to_string()))
            }
            MapEntry::Vacant(vacant) => {
                vacant.insert(Entry {
                    target: target.to_owned(),
                    created_at: self.clock.tick(),
                });
                info!(%slug, link = target, "link inserted");
                Ok(())
            }
        }
    }

    async fn remove(&self, slug: &Slug) -> Result<()> {
        let removed = self.table.write().remove(slug);

        match removed {
            Some(_) => {
                info!(%slug, "link removed");
                Ok(())
            }
            None => {
                debug!(%slug, "remove missed");
                Err(StoreError::NotFound(slug.to_string()))
            }
        }
    }

    async fn get(&self, slug: &Slug) -> Result<String> {
        let table = self.table.read();

        let Some(entry) = table.get(slug) else {
            debug!(%slug, "slug not found");
            return Err(StoreError::NotFound(slug.to_string()));
        };

        debug!(%slug, link = %entry.target, "link found");
        Ok(entry.target.clone())
    }

    async fn record(&self, slug: &Slug) -> Result<LinkRecord> {
        self.table
            .read()
            .get(slug)
            .cloned()
            .map(|entry| entry.into_record(slug))
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))
    }

    async fn slugs(&self) -> Result<Vec<Slug>> {
        let mut slugs: Vec<Slug> = self.table.read().keys().cloned().collect();
        slugs.sort();
        Ok(slugs)
    }

    async fn disconnect(&self) {}
}
