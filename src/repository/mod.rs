//! Repository layer for database operations
//!
//! The loader talks to the catalog through [`CatalogStore`], a single session
//! with implicit transactions: the first statement after a
//! `commit`/`rollback` opens a transaction and `commit` ends it.

pub mod postgres;


use async_trait::async_trait;

use crate::{error::LoadResult, models::NewBook};

pub use postgres::PgCatalogStore;

/// Statements the loader issues against the catalog tables
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send {
    /// Look up an author by exact name.
    async fn find_author_id(&mut self, name: &str) -> LoadResult<Option<i32>>;

    /// Insert an author row and return its generated id.
    async fn insert_author(&mut self, name: &str) -> LoadResult<i32>;

    /// Insert a book row and return its generated id.
    async fn insert_book(&mut self, book: &NewBook) -> LoadResult<i32>;

    /// Link a book to an author. Returns `false` when the pair already existed.
    async fn link_book_author(&mut self, book_id: i32, author_id: i32) -> LoadResult<bool>;

    /// Commit everything written since the last commit or rollback.
    async fn commit(&mut self) -> LoadResult<()>;

    /// Discard everything written since the last commit or rollback.
    async fn rollback(&mut self) -> LoadResult<()>;
}

/// A store that owns its connection and can be shut down
#[async_trait]
pub trait Session: CatalogStore + Sized {
    /// Discard uncommitted work and close the underlying connection.
    async fn close(self) -> LoadResult<()>;
}
