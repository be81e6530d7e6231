//! Loader services: connection handling, author resolution, CSV ingestion
//! and the pipeline driving them.

pub mod authors;
pub mod connection;
pub mod ingest;
pub mod pipeline;

pub use authors::{resolve_author, AuthorResolution};
pub use connection::connect_with_retry;
pub use ingest::BookIngestor;
pub use pipeline::run_pipeline;
