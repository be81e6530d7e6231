//! Pipeline driver: connect, ingest, tear down

use std::{fmt::Display, future::Future};

use crate::{
    config::AppConfig,
    error::LoadResult,
    models::ImportSummary,
    repository::Session,
};

use super::{connection::connect_with_retry, ingest::BookIngestor};

/// Run one full load.
///
/// Only a failed connection is returned as an error; whatever happens during
/// ingestion, the session is closed exactly once before returning.
pub async fn run_pipeline<S, E, F, Fut>(config: &AppConfig, connect: F) -> LoadResult<ImportSummary>
where
    S: Session,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<S, E>>,
    E: Display,
{
    let mut session = connect_with_retry(&config.retry, connect).await?;

    let summary = BookIngestor::from(&config.loader)
        .ingest(&mut session, &config.loader.csv_path)
        .await;

    tracing::info!(
        rows_read = summary.rows_read,
        books_inserted = summary.books_inserted,
        authors_created = summary.authors_created,
        authors_reused = summary.authors_reused,
        links_created = summary.links_created,
        rows_failed = summary.rows_failed,
        "Import finished{}",
        summary
            .aborted
            .as_ref()
            .map(|reason| format!(" early ({})", reason))
            .unwrap_or_default()
    );

    tracing::info!("Closing the database connection.");
    if let Err(e) = session.close().await {
        tracing::error!("Failed to close the database connection: {}", e);
    }

    Ok(summary)
}
