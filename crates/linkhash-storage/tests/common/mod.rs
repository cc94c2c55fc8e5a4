use linkhash_storage::{SqliteSettings, Store, StoreConfig};
use tempfile::TempDir;

/// Keeps the temporary directory alive for as long as the store is used.
pub struct Fixture {
    pub dir: Option<TempDir>,
    pub store: Store,
}

impl Fixture {
    pub async fn memory() -> Self {
        Self {
            dir: None,
            store: Store::connect(&StoreConfig::Memory)
                .await
                .expect("connect memory store"),
        }
    }

    pub async fn sqlite() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let config = StoreConfig::Sqlite(
            SqliteSettings::builder()
                .path(dir.path().join("links.db"))
                .build(),
        );
        let store = Store::connect(&config).await.expect("connect sqlite store");

        Self {
            dir: Some(dir),
            store,
        }
    }

    pub async fn both() -> [Self; 2] {
        [Self::memory().await, Self::sqlite().await]
    }
}
