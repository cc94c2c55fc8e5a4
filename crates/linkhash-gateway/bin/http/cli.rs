use clap::Parser;
use linkhash_core::StoreError;
use linkhash_generator::{GeneratorSettings, DEFAULT_MIN_LENGTH};
use linkhash_storage::config::DEFAULT_DATABASE_PATH;
use linkhash_storage::{BackendKind, StoreConfig};
use linkhash_telemetry::LogFormat;
use std::net::SocketAddr;
use std::str::FromStr;

pub const LISTEN_ADDR_ENV: &str = "LINKHASH_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "LINKHASH_STORAGE_BACKEND";
pub const DATABASE_PATH_ENV: &str = "LINKHASH_DATABASE_PATH";
pub const MIN_SLUG_LENGTH_ENV: &str = "LINKHASH_MIN_SLUG_LENGTH";
pub const LOG_FORMAT_ENV: &str = "LINKHASH_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4000";

#[derive(Debug, Parser)]
#[command(name = "linkhash", about = "Deterministic link shortener")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Storage backend: `memory` or `sqlite`.
    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        default_value = "memory",
        value_parser = BackendKind::from_str
    )]
    pub storage: BackendKind,

    /// Database file, used by the `sqlite` backend.
    #[arg(long, env = DATABASE_PATH_ENV, default_value = DEFAULT_DATABASE_PATH)]
    pub database_path: String,

    #[arg(long, env = MIN_SLUG_LENGTH_ENV, default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_slug_length: usize,

    /// Log output: `text` or `json`.
    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        default_value = "text",
        value_parser = LogFormat::from_str
    )]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn store_config(&self) -> Result<StoreConfig, StoreError> {
        StoreConfig::from_parts(self.storage, self.database_path.as_str())
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings::builder()
            .min_length(self.min_slug_length)
            .build()
    }
}
