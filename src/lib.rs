//! Book Loader
//!
//! One-shot batch import of a books CSV into PostgreSQL: each row becomes a
//! `books` record, its authors are found or created in `authors`, and the
//! pair is recorded in the `book_author` join table.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::error::{LoadError, LoadResult};
