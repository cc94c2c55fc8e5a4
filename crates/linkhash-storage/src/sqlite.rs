use crate::config::SqliteSettings;
use async_trait::async_trait;
use jiff::Timestamp;
use linkhash_core::{LinkRecord, LinkStore, MonotonicClock, Result, Slug, StoreError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Connection, Row, SqlitePool};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

const CREATE_LINKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS links (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    slug TEXT UNIQUE NOT NULL,
    link TEXT NOT NULL,
    created INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER))
)
"#;

/// Persistent implementation of [`LinkStore`] backed by a SQLite file.
///
/// The pool holds a single connection so the file only ever sees one writer.
/// The in-process `gate` gives the same reader/writer discipline as
/// [`MemoryStore`](crate::MemoryStore), and the `UNIQUE` constraint on
/// `slug` makes every insert an atomic insert-if-absent.
#[derive(Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
    gate: RwLock<()>,
    clock: MonotonicClock,
}

impl SqliteStore {
    /// Opens (creating if needed) the database file, pings it and ensures the
    /// `links` table exists.
    pub async fn connect(settings: &SqliteSettings) -> Result<Self> {
        info!(path = %settings.path.display(), "connecting sqlite store");

        if let Some(parent) = settings
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!(path = %parent.display(), error = %e, "cannot create database directory");
                StoreError::Connection(format!(
                    "cannot create database directory '{}': {e}",
                    parent.display()
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&settings.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                error!(error = %e, "database connection failed");
                StoreError::Connection(e.to_string())
            })?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, verifying connectivity and creating the schema.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        {
            let mut conn = pool.acquire().await.map_err(map_sqlx_error)?;
            conn.ping().await.map_err(|e| {
                error!(error = %e, "database ping failed");
                StoreError::Connection(e.to_string())
            })?;
        }

        sqlx::query(CREATE_LINKS_TABLE)
            .execute(&pool)
            .await
            .map_err(|e| {
                error!(error = %e, "database schema creation failed");
                StoreError::Schema(e.to_string())
            })?;

        info!("sqlite store ready");

        Ok(Self {
            pool,
            gate: RwLock::new(()),
            clock: MonotonicClock::new(),
        })
    }
}

fn parse_created(seconds: i64) -> Result<Timestamp> {
    Timestamp::from_second(seconds).map_err(|e| {
        StoreError::InvalidData(format!("invalid created timestamp '{}': {e}", seconds))
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_) => StoreError::Connection(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_) => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}

#[async_trait]
impl LinkStore for SqliteStore {
    async fn is_available(&self, slug: &Slug) -> Result<bool> {
        let _guard = self.gate.read().await;

        let taken = sqlx::query("SELECT 1 FROM links WHERE slug = ? LIMIT 1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .is_some();

        debug!(%slug, available = !taken, "checked slug availability");
        Ok(!taken)
    }

    async fn insert(&self, slug: &Slug, target: &str) -> Result<()> {
        let _guard = self.gate.write().await;

        let created = self.clock.tick().as_second();
        let result = sqlx::query("INSERT INTO links (slug, link, created) VALUES (?, ?, ?)")
            .bind(slug.as_str())
            .bind(target)
            .bind(created)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => {
                info!(%slug, link = target, "link inserted");
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => {
                warn!(%slug, "slug already exists");
                Err(StoreError::DuplicateSlug(slug.to_string()))
            }
            Err(err) => {
                error!(%slug, error = %err, "insert failed");
                Err(map_sqlx_error(err))
            }
        }
    }

    async fn remove(&self, slug: &Slug) -> Result<()> {
        let _guard = self.gate.write().await;

        let result = sqlx::query("DELETE FROM links WHERE slug = ?")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            debug!(%slug, "remove missed");
            return Err(StoreError::NotFound(slug.to_string()));
        }

        info!(%slug, "link removed");
        Ok(())
    }

    async fn get(&self, slug: &Slug) -> Result<String> {
        let _guard = self.gate.read().await;

        let row = sqlx::query("SELECT link FROM links WHERE slug = ?")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            debug!(%slug, "slug not found");
            return Err(StoreError::NotFound(slug.to_string()));
        };

        let link: String = row.try_get("link").map_err(map_sqlx_error)?;
        debug!(%slug, %link, "link found");
        Ok(link)
    }

    async fn record(&self, slug: &Slug) -> Result<LinkRecord> {
        let _guard = self.gate.read().await;

        let row = sqlx::query("SELECT link, created FROM links WHERE slug = ?")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))?;

        let target: String = row.try_get("link").map_err(map_sqlx_error)?;
        let created: i64 = row.try_get("created").map_err(map_sqlx_error)?;

        Ok(LinkRecord {
            slug: slug.clone(),
            target,
            created_at: parse_created(created)?,
        })
    }

    async fn slugs(&self) -> Result<Vec<Slug>> {
        let _guard = self.gate.read().await;

        let rows = sqlx::query("SELECT slug FROM links ORDER BY slug")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("slug")
                    .map(Slug::new_unchecked)
                    .map_err(map_sqlx_error)
            })
            .collect()
    }

    async fn disconnect(&self) {
        let _guard = self.gate.write().await;

        if self.pool.is_closed() {
            return;
        }

        info!("disconnecting sqlite store");
        self.pool.close().await;
        info!("sqlite store disconnected");
    }
}
