//! # Catalog Source
//!
//! Book and review records come from a catalog source. The [`CatalogSource`]
//! trait mirrors the calls the library's REST API offers, so the rest of the
//! crate never knows where records live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a directory of JSON documents in the API's record shape
//!   ```text
//!   <data dir>/
//!   ├── books.json     # JSON array of book records
//!   ├── reviews.json   # JSON array of review records
//!   └── config.json    # settings (see config.rs)
//!   ```
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Identifiers
//!
//! Sources assign identifiers on insert, like the API server does: one more
//! than the highest identifier currently stored, starting at 1.
//!
//! ## Failure
//!
//! Source errors (I/O, unreadable documents) are returned to the caller as-is.
//! Nothing here retries; the UI reports the failure.

use crate::error::Result;
use crate::model::{Book, BookDraft, BookId, NewReview, Review, ReviewId};

pub mod fs;
pub mod memory;

pub trait CatalogSource {
    /// Every book, in the source's listing order.
    fn list_books(&self) -> Result<Vec<Book>>;

    /// A single book, or `ShelfError::BookNotFound`.
    fn get_book(&self, id: BookId) -> Result<Book>;

    /// Stores a new book and returns it with its assigned identifier.
    fn add_book(&mut self, draft: BookDraft) -> Result<Book>;

    /// Replaces an existing book. Fails with `BookNotFound` if `book.id` is unknown.
    fn save_book(&mut self, book: &Book) -> Result<()>;

    fn delete_book(&mut self, id: BookId) -> Result<()>;

    fn list_reviews(&self) -> Result<Vec<Review>>;

    /// Reviews of one book, in listing order.
    fn reviews_for_book(&self, book_id: BookId) -> Result<Vec<Review>> {
        Ok(self
            .list_reviews()?
            .into_iter()
            .filter(|r| r.book_id == book_id)
            .collect())
    }

    /// Stores a review of `book_id` and returns it with its assigned identifier.
    fn add_review(&mut self, book_id: BookId, review: NewReview) -> Result<Review>;

    fn delete_review(&mut self, id: ReviewId) -> Result<()>;
}

/// Next identifier after the highest one in `ids`.
pub(crate) fn next_id<I: IntoIterator<Item = u64>>(ids: I) -> u64 {
    ids.into_iter().max().map_or(1, |max| max + 1)
}
