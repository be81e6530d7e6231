//! Database connection with fixed-delay retries

use std::{fmt::Display, future::Future};

use crate::{
    config::RetryConfig,
    error::{LoadError, LoadResult},
};

/// Run `connect` until it succeeds or `max_attempts` is reached.
///
/// Waits `delay_seconds` between attempts, with no backoff growth and no
/// jitter. No wait follows the last failure.
pub async fn connect_with_retry<T, E, F, Fut>(retry: &RetryConfig, mut connect: F) -> LoadResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    tracing::info!("Connecting to the database...");

    let mut attempt = 0;
    loop {
        attempt += 1;
        match connect().await {
            Ok(conn) => {
                tracing::info!("Connected to the database!");
                return Ok(conn);
            }
            Err(e) => {
                tracing::warn!(attempt, "Failed to connect to the database: {}", e);
                if attempt >= retry.max_attempts {
                    tracing::error!(
                        "Giving up after {} attempts to connect to the database",
                        attempt
                    );
                    return Err(LoadError::ConnectionExhausted {
                        attempts: attempt,
                        last_error: e.to_string(),
                    });
                }
                tracing::info!("Retrying in {} seconds...", retry.delay_seconds);
                tokio::time::sleep(retry.delay()).await;
            }
        }
    }
}
