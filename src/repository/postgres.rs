//! PostgreSQL implementation of the catalog store

use async_trait::async_trait;
use std::future::Future;
use sqlx::{postgres::PgConnectOptions, types::Json, Connection, PgConnection};

use crate::{error::LoadResult, models::NewBook};

use super::{CatalogStore, Session};

/// One PostgreSQL connection used for the whole run
pub struct PgCatalogStore {
    conn: PgConnection,
    in_transaction: bool,
}

impl PgCatalogStore {
    /// Open a new connection
    pub async fn connect(options: &PgConnectOptions) -> Result<Self, sqlx::Error> {
        let conn = PgConnection::connect_with(options).await?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already opened connection
    pub fn from_connection(conn: PgConnection) -> Self {
        Self {
            conn,
            in_transaction: false,
        }
    }

    async fn ensure_transaction(&mut self) -> LoadResult<()> {
        if !self.in_transaction {
            sqlx::query("BEGIN").execute(&mut self.conn).await?;
            self.in_transaction = true;
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_author_id(&mut self, name: &str) -> LoadResult<Option<i32>> {
        self.ensure_transaction().await?;

        let id = sqlx::query_scalar::<_, i32>(
            "SELECT author_id FROM authors WHERE name = $1 ORDER BY author_id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&mut self.conn)
        .await?;

        Ok(id)
    }

    async fn insert_author(&mut self, name: &str) -> LoadResult<i32> {
        self.ensure_transaction().await?;

        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO authors (name) VALUES ($1) RETURNING author_id",
        )
        .bind(name)
        .fetch_one(&mut self.conn)
        .await?;

        Ok(id)
    }

    /// The CSV values are sent as one JSON object and converted by
    /// `jsonb_populate_record`, so each column's own input function parses
    /// the raw text (an invalid year fails here, not in the loader).
    async fn insert_book(&mut self, book: &NewBook) -> LoadResult<i32> {
        self.ensure_transaction().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (isbn13, publication_year, title, rating_avg, rating_count, image_url, image_small_url)
            SELECT isbn13, publication_year, title, rating_avg, rating_count, image_url, image_small_url
            FROM jsonb_populate_record(NULL::books, $1)
            RETURNING book_id
            "#,
        )
        .bind(Json(book))
        .fetch_one(&mut self.conn)
        .await?;

        Ok(id)
    }

    async fn link_book_author(&mut self, book_id: i32, author_id: i32) -> LoadResult<bool> {
        self.ensure_transaction().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO book_author (book_id, author_id)
            VALUES ($1, $2)
            ON CONFLICT (book_id, author_id) DO NOTHING
            "#,
        )
        .bind(book_id)
        .bind(author_id)
        .execute(&mut self.conn)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn commit(&mut self) -> LoadResult<()> {
        if self.in_transaction {
            sqlx::query("COMMIT").execute(&mut self.conn).await?;
            self.in_transaction = false;
        }
        Ok(())
    }

    async fn rollback(&mut self) -> LoadResult<()> {
        if self.in_transaction {
            // Leave the flag cleared even if ROLLBACK itself fails
            self.in_transaction = false;
            sqlx::query("ROLLBACK").execute(&mut self.conn).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Session for PgCatalogStore {
    async fn close(self) -> LoadResult<()> {
        let mut store = self;
        let rolled_back = store.rollback().await;
        finish_close(rolled_back, store.conn.close()).await
    }
}

/// Await `closing` whatever the outcome of the rollback that preceded it.
/// A close failure is reported first, then a rollback failure.
async fn finish_close<F>(rolled_back: LoadResult<()>, closing: F) -> LoadResult<()>
where
    F: Future<Output = Result<(), sqlx::Error>>,
{
    if let Err(ref e) = rolled_back {
        tracing::error!("Failed to roll back pending work before closing: {}", e);
    }
    closing.await?;
    rolled_back
}
