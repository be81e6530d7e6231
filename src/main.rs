//! Book Loader - load books.csv into the catalog database

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_loader::{
    config::{AppConfig, LoggingConfig},
    repository::PgCatalogStore,
    services::run_pipeline,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Book Loader v{}", env!("CARGO_PKG_VERSION"));

    let options = config.database.connect_options();
    let summary = run_pipeline(&config, || PgCatalogStore::connect(&options))
        .await
        .context("Failed to connect to the database")?;

    if let Some(reason) = &summary.aborted {
        tracing::warn!("Import stopped early: {}", reason);
    } else if !summary.is_clean() {
        tracing::warn!("Import completed with {} failed row(s)", summary.rows_failed);
    }

    Ok(())
}

/// Install the stdout subscriber; `RUST_LOG` overrides the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("book_loader={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
