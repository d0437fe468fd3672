use super::{next_id, CatalogSource};
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookDraft, BookId, NewReview, Review, ReviewId};

/// Keeps records in insertion order, like the API listing.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    books: Vec<Book>,
    reviews: Vec<Review>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with records, kept with their identifiers.
    pub fn with_records(books: Vec<Book>, reviews: Vec<Review>) -> Self {
        Self { books, reviews }
    }
}

impl CatalogSource for InMemoryStore {
    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn get_book(&self, id: BookId) -> Result<Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(ShelfError::BookNotFound(id))
    }

    fn add_book(&mut self, draft: BookDraft) -> Result<Book> {
        let id = next_id(self.books.iter().map(|b| b.id));
        let book = Book::from_draft(id, draft);
        self.books.push(book.clone());
        Ok(book)
    }

    fn save_book(&mut self, book: &Book) -> Result<()> {
        let slot = self
            .books
            .iter_mut()
            .find(|b| b.id == book.id)
            .ok_or(ShelfError::BookNotFound(book.id))?;
        *slot = book.clone();
        Ok(())
    }

    fn delete_book(&mut self, id: BookId) -> Result<()> {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        if self.books.len() == before {
            return Err(ShelfError::BookNotFound(id));
        }
        Ok(())
    }

    fn list_reviews(&self) -> Result<Vec<Review>> {
        Ok(self.reviews.clone())
    }

    fn add_review(&mut self, book_id: BookId, review: NewReview) -> Result<Review> {
        let id = next_id(self.reviews.iter().map(|r| r.id));
        let review = Review {
            id,
            book_id,
            name: review.name,
            rating: review.rating,
            comment: review.comment,
        };
        self.reviews.push(review.clone());
        Ok(review)
    }

    fn delete_review(&mut self, id: ReviewId) -> Result<()> {
        let before = self.reviews.len();
        self.reviews.retain(|r| r.id != id);
        if self.reviews.len() == before {
            return Err(ShelfError::ReviewNotFound(id));
        }
        Ok(())
    }
}
