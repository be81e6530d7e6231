//! Book models: the CSV row as read and the row handed to the `books` table

use serde::{Deserialize, Serialize};

/// One record of the input CSV, keyed by header name.
///
/// Every field is kept as the raw text from the file. Additional columns in
/// the file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookRow {
    pub isbn13: String,
    pub original_publication_year: String,
    pub title: String,
    pub average_rating: String,
    pub ratings_count: String,
    pub image_url: String,
    pub small_image_url: String,
    pub authors: String,
}

/// Insert payload for the `books` table.
///
/// Serialized with the table's column names so PostgreSQL can convert each
/// value to its column type (see `PgCatalogStore::insert_book`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBook {
    pub isbn13: String,
    pub publication_year: String,
    pub title: String,
    pub rating_avg: String,
    pub rating_count: String,
    pub image_url: String,
    pub image_small_url: String,
}

impl From<&BookRow> for NewBook {
    fn from(row: &BookRow) -> Self {
        Self {
            isbn13: row.isbn13.clone(),
            publication_year: row.original_publication_year.clone(),
            title: row.title.clone(),
            rating_avg: row.average_rating.clone(),
            rating_count: row.ratings_count.clone(),
            image_url: row.image_url.clone(),
            image_small_url: row.small_image_url.clone(),
        }
    }
}
