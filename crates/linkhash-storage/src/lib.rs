//! Storage backends for linkhash.
//!
//! Two interchangeable [`LinkStore`] implementations are provided:
//! [`MemoryStore`] keeps links in process memory and [`SqliteStore`]
//! persists them to a single SQLite file. [`Store`] selects one of them
//! from a [`StoreConfig`] at startup.

pub mod config;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use config::{BackendKind, SqliteSettings, StoreConfig};
pub use linkhash_core::{LinkRecord, LinkStore, Result, Slug, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::Store;
