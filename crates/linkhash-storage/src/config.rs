use linkhash_core::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use typed_builder::TypedBuilder;

pub const DEFAULT_DATABASE_PATH: &str = "./data/links.db";

/// Which backend a [`Store`](crate::Store) is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Links live in process memory and vanish on shutdown.
    Memory,
    /// Links are persisted to a SQLite file.
    Sqlite,
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Memory => write!(f, "memory"),
            BackendKind::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(BackendKind::Memory),
            "sqlite" => Ok(BackendKind::Sqlite),
            other => Err(StoreError::Config(format!(
                "unknown storage backend '{other}', supported backends are 'memory' and 'sqlite'"
            ))),
        }
    }
}

/// Settings for the SQLite backend.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder, Serialize, Deserialize)]
pub struct SqliteSettings {
    /// Location of the database file. Missing parent directories are created.
    #[builder(default = PathBuf::from(DEFAULT_DATABASE_PATH), setter(into))]
    pub path: PathBuf,
}

impl Default for SqliteSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Backend selection made once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    Memory,
    Sqlite(SqliteSettings),
}

impl StoreConfig {
    /// Builds a config from a backend and the persistent-store location.
    ///
    /// The location is ignored for the memory backend and must be non-empty
    /// for SQLite.
    pub fn from_parts(
        backend: BackendKind,
        path: impl Into<PathBuf>,
    ) -> Result<Self, StoreError> {
        let config = match backend {
            BackendKind::Memory => StoreConfig::Memory,
            BackendKind::Sqlite => {
                let path = path.into();
                if path.as_os_str().is_empty() {
                    return Err(StoreError::Config(
                        "sqlite backend requires a database path".to_string(),
                    ));
                }
                StoreConfig::Sqlite(SqliteSettings::builder().path(path).build())
            }
        };
        Ok(config)
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            StoreConfig::Memory => BackendKind::Memory,
            StoreConfig::Sqlite(_) => BackendKind::Sqlite,
        }
    }
}
