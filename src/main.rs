mod core;
mod features;
mod modules;
mod shared;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::app::build_router;
use crate::core::config::Config;
use crate::core::{database, server};
use crate::modules::store::{MemoryStore, PgStore, TriviaStore};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    let store: Arc<dyn TriviaStore> = if config.database.is_memory() {
        tracing::info!("Using in-memory store seeded with default categories");
        Arc::new(MemoryStore::seeded())
    } else {
        let pool = database::create_pool(&config.database).await?;
        tracing::info!("Database connection pool created");

        let store = PgStore::new(pool);
        tracing::info!("Running database migrations...");
        store
            .migrate()
            .await
            .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
        tracing::info!("Database migrations completed successfully");

        Arc::new(store)
    };

    let app = build_router(&config.app, &config.swagger, store);

    let addr = config.app.server_address();
    let socket_addr: SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let listener = server::bind_listener(socket_addr)?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
