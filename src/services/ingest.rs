//! CSV ingestion of books and their authors

use std::fs::File;

use crate::{
    config::LoaderConfig,
    error::{LoadError, LoadResult},
    models::{
        author::parse_author_names, AbortReason, BookRow, ImportSummary, NewBook,
    },
    repository::CatalogStore,
};

use super::authors::{resolve_author, AuthorResolution};

/// Header names every input file must provide
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "isbn13",
    "original_publication_year",
    "title",
    "average_rating",
    "ratings_count",
    "image_url",
    "small_image_url",
    "authors",
];

/// Counters for one row, merged into the summary only once the row commits
#[derive(Default)]
struct RowCounts {
    links_created: u64,
}

#[derive(Debug, Clone, Default)]
pub struct BookIngestor {
    stop_on_row_error: bool,
}

impl BookIngestor {
    pub fn new(stop_on_row_error: bool) -> Self {
        Self { stop_on_row_error }
    }

    /// Load every row of the CSV file at `csv_path`.
    ///
    /// Never fails: a missing or unreadable file is logged and ends the run
    /// early, a failing row is logged and rolled back. The returned summary
    /// says what was loaded.
    pub async fn ingest<S>(&self, store: &mut S, csv_path: &str) -> ImportSummary
    where
        S: CatalogStore + ?Sized,
    {
        tracing::info!("Loading data from CSV...");

        let mut summary = ImportSummary::default();

        let mut reader = match open_reader(csv_path) {
            Ok(reader) => reader,
            Err(e @ LoadError::FileNotFound { .. }) => {
                tracing::error!("Error: {}", e);
                summary.aborted = Some(AbortReason::MissingFile);
                return summary;
            }
            Err(e) => {
                tracing::error!("An error occurred while loading data: {}", e);
                summary.aborted = Some(AbortReason::UnreadableInput);
                return summary;
            }
        };

        for (index, record) in reader.deserialize::<BookRow>().enumerate() {
            // Line 1 is the header
            let line = index + 2;

            let outcome = match record {
                Err(e) if e.is_io_error() => {
                    tracing::error!("An error occurred while loading data: {}", e);
                    summary.aborted = Some(AbortReason::UnreadableInput);
                    break;
                }
                Err(e) => Err(LoadError::Csv(e)),
                Ok(row) => self.load_row(store, &row, &mut summary).await,
            };
            summary.rows_read += 1;

            match outcome {
                Ok(counts) => {
                    summary.books_inserted += 1;
                    summary.links_created += counts.links_created;
                }
                Err(e) => {
                    summary.rows_failed += 1;
                    tracing::error!(line, "An error occurred while loading data: {}", e);
                    if let Err(rollback_err) = store.rollback().await {
                        tracing::error!("Failed to roll back row {}: {}", line, rollback_err);
                    }
                    if self.stop_on_row_error {
                        summary.aborted = Some(AbortReason::StoppedOnRowError);
                        break;
                    }
                    tracing::warn!(line, "Skipping row and continuing with the next one");
                }
            }
        }

        summary
    }

    /// Resolve the row's authors, then insert the book and its links and
    /// commit them together.
    ///
    /// Authors are resolved first because each new author is committed on
    /// the shared session; resolving them after the book insert would commit
    /// the book early and leave it without links if the row later fails.
    async fn load_row<S>(
        &self,
        store: &mut S,
        row: &BookRow,
        summary: &mut ImportSummary,
    ) -> LoadResult<RowCounts>
    where
        S: CatalogStore + ?Sized,
    {
        let mut author_ids = Vec::new();
        for name in parse_author_names(&row.authors) {
            let author = resolve_author(store, &name).await?;
            match author {
                AuthorResolution::Created(_) => summary.authors_created += 1,
                AuthorResolution::Existing(_) => summary.authors_reused += 1,
            }
            author_ids.push(author.id());
        }

        tracing::info!("Inserting book: {} with ISBN: {}", row.title, row.isbn13);
        let book_id = store.insert_book(&NewBook::from(row)).await?;
        tracing::info!("Inserted book with ID: {}", book_id);

        let mut counts = RowCounts::default();
        for author_id in author_ids {
            if store.link_book_author(book_id, author_id).await? {
                counts.links_created += 1;
            }
        }

        store.commit().await?;
        Ok(counts)
    }
}

impl From<&LoaderConfig> for BookIngestor {
    fn from(config: &LoaderConfig) -> Self {
        Self::new(config.stop_on_row_error)
    }
}

fn open_reader(csv_path: &str) -> LoadResult<csv::Reader<File>> {
    let file = File::open(csv_path).map_err(|e| LoadError::from_open(csv_path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing.join(", ")));
    }

    Ok(reader)
}
