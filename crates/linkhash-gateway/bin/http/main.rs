mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use linkhash_core::LinkStore;
use linkhash_gateway::{App, AppState};
use linkhash_generator::SlugGenerator;
use linkhash_shortener::LinkService;
use linkhash_storage::Store;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    linkhash_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        min_slug_length = config.min_slug_length,
        "application starting"
    );

    if config.listen_addr.port() < 1024 {
        warn!(
            port = config.listen_addr.port(),
            "port in reserved range may fail if user is not root"
        );
    }

    let generator = SlugGenerator::new(config.generator_settings())
        .context("invalid slug generator configuration")?;

    let store_config = config
        .store_config()
        .context("invalid storage configuration")?;

    let store = Arc::new(
        Store::connect(&store_config)
            .await
            .context("failed to connect storage backend")?,
    );

    let service = LinkService::new(Arc::clone(&store), generator);
    let router = App::router(AppState::new(Arc::new(service)));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.disconnect().await;
    served.context("gateway server failed")?;

    info!("application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
