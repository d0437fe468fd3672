use super::{next_id, CatalogSource};
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookDraft, BookId, NewReview, Review, ReviewId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const BOOKS_FILE: &str = "books.json";
const REVIEWS_FILE: &str = "reviews.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        } else if !self.root.is_dir() {
            return Err(ShelfError::Store(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<T> = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        tracing::debug!(file = %path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn store<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.root.join(name);
        let content = serde_json::to_string_pretty(records).map_err(ShelfError::Serialization)?;

        // Atomic replace: write a temp sibling, then rename over the document.
        let tmp = self.root.join(format!(".{}.tmp", name));
        fs::write(&tmp, content).map_err(ShelfError::Io)?;
        fs::rename(&tmp, &path).map_err(ShelfError::Io)?;
        tracing::debug!(file = %path.display(), count = records.len(), "saved records");
        Ok(())
    }

    fn load_books(&self) -> Result<Vec<Book>> {
        self.load(BOOKS_FILE)
    }

    fn load_reviews(&self) -> Result<Vec<Review>> {
        self.load(REVIEWS_FILE)
    }
}

impl CatalogSource for FileStore {
    fn list_books(&self) -> Result<Vec<Book>> {
        self.load_books()
    }

    fn get_book(&self, id: BookId) -> Result<Book> {
        self.load_books()?
            .into_iter()
            .find(|b| b.id == id)
            .ok_or(ShelfError::BookNotFound(id))
    }

    fn add_book(&mut self, draft: BookDraft) -> Result<Book> {
        let mut books = self.load_books()?;
        let book = Book::from_draft(next_id(books.iter().map(|b| b.id)), draft);
        books.push(book.clone());
        self.store(BOOKS_FILE, &books)?;
        Ok(book)
    }

    fn save_book(&mut self, book: &Book) -> Result<()> {
        let mut books = self.load_books()?;
        let slot = books
            .iter_mut()
            .find(|b| b.id == book.id)
            .ok_or(ShelfError::BookNotFound(book.id))?;
        *slot = book.clone();
        self.store(BOOKS_FILE, &books)
    }

    fn delete_book(&mut self, id: BookId) -> Result<()> {
        let mut books = self.load_books()?;
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(ShelfError::BookNotFound(id));
        }
        self.store(BOOKS_FILE, &books)
    }

    fn list_reviews(&self) -> Result<Vec<Review>> {
        self.load_reviews()
    }

    fn add_review(&mut self, book_id: BookId, review: NewReview) -> Result<Review> {
        let mut reviews = self.load_reviews()?;
        let review = Review {
            id: next_id(reviews.iter().map(|r| r.id)),
            book_id,
            name: review.name,
            rating: review.rating,
            comment: review.comment,
        };
        reviews.push(review.clone());
        self.store(REVIEWS_FILE, &reviews)?;
        Ok(review)
    }

    fn delete_review(&mut self, id: ReviewId) -> Result<()> {
        let mut reviews = self.load_reviews()?;
        let before = reviews.len();
        reviews.retain(|r| r.id != id);
        if reviews.len() == before {
            return Err(ShelfError::ReviewNotFound(id));
        }
        self.store(REVIEWS_FILE, &reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Genre;

    #[test]
    fn missing_directory_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing-here"));
        assert!(store.list_books().unwrap().is_empty());
        assert!(store.list_reviews().unwrap().is_empty());
    }

    #[test]
    fn books_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let added = store
            .add_book(BookDraft::new("Dune", "Frank Herbert").with_genre(Genre::ScienceFiction))
            .unwrap();

        let reopened = FileStore::new(dir.path());
        let book = reopened.get_book(added.id).unwrap();
        assert_eq!(book, added);
        assert!(dir.path().join(BOOKS_FILE).exists());
    }

    #[test]
    fn save_and_delete_round_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let mut book = store.add_book(BookDraft::new("Old", "A")).unwrap();
        book.title = "New".into();
        store.save_book(&book).unwrap();
        assert_eq!(store.get_book(book.id).unwrap().title, "New");

        store.delete_book(book.id).unwrap();
        assert!(matches!(
            store.get_book(book.id),
            Err(ShelfError::BookNotFound(_))
        ));
        assert!(matches!(
            store.delete_book(book.id),
            Err(ShelfError::BookNotFound(_))
        ));
    }

    #[test]
    fn reads_api_shaped_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(BOOKS_FILE),
            r#"[{"id": 12, "title": "The Hobbit", "author": "J.R.R. Tolkien",
                 "description": "", "pages": 310, "img": "",
                 "genres": "fantasy", "releasedate": "1937-09-21T00:00:00.000Z"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(REVIEWS_FILE),
            r#"[{"id": 3, "bookId": 12, "name": "Sam", "rating": 5, "comment": "Lovely"}]"#,
        )
        .unwrap();

        let mut store = FileStore::new(dir.path());
        let books = store.list_books().unwrap();
        assert_eq!(books[0].genre, Genre::Fantasy);
        assert_eq!(store.reviews_for_book(12).unwrap().len(), 1);

        let next = store.add_book(BookDraft::new("Next", "B")).unwrap();
        assert_eq!(next.id, 13);
    }

    #[test]
    fn corrupt_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(BOOKS_FILE), "{not json").unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.list_books(),
            Err(ShelfError::Serialization(_))
        ));
    }

    #[test]
    fn root_that_is_a_file_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("catalog");
        fs::write(&file, "").unwrap();
        let mut store = FileStore::new(&file);
        assert!(matches!(
            store.add_book(BookDraft::new("T", "A")),
            Err(ShelfError::Store(_))
        ));
    }

    #[test]
    fn reviews_persist() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let review = store
            .add_review(1, NewReview::new("Ann", 4, "Good"))
            .unwrap();
        assert_eq!(review.id, 1);
        assert_eq!(FileStore::new(dir.path()).list_reviews().unwrap(), vec![review.clone()]);
        store.delete_review(review.id).unwrap();
        assert!(store.list_reviews().unwrap().is_empty());
    }
}
