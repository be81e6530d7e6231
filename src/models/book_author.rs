//! Book-Author junction model (N:M relationship)

/// Junction row linking a book to one of its authors.
/// `(book_id, author_id)` is unique in the `book_author` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookAuthor {
    pub book_id: i32,
    pub author_id: i32,
}
