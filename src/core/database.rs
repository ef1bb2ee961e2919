use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::core::config::DatabaseConfig;

/// Pool settings derived from config, without connecting
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
}

/// Connection URL with the credentials stripped, safe for logs
pub fn redacted_url(url: &str) -> String {
    match (url.split_once("://"), url.rsplit_once('@')) {
        (Some((scheme, _)), Some((_, host))) => format!("{}://***@{}", scheme, host),
        _ => url.to_string(),
    }
}

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        "Connecting to {} (max_connections={})",
        redacted_url(&config.url),
        config.max_connections
    );

    pool_options(config).connect(&config.url).await
}
