//! Error types for the book loader

use thiserror::Error;

/// Main loader error type
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Input file not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing CSV columns: {0}")]
    MissingColumns(String),

    #[error("Could not connect to the database after {attempts} attempts: {last_error}")]
    ConnectionExhausted { attempts: u32, last_error: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl LoadError {
    /// Map an error raised while opening the input file, keeping
    /// "not found" distinct from other I/O failures.
    pub fn from_open(path: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: path.to_string(),
                source: err,
            }
        } else {
            LoadError::Io(err)
        }
    }
}

/// Result type alias for loader operations
pub type LoadResult<T> = Result<T, LoadError>;
