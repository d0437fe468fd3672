use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::store::CatalogSource;

/// Deletes each book together with its reviews.
pub fn run<S: CatalogSource>(store: &mut S, ids: &[BookId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let book = store.get_book(id)?;
        let reviews = store.reviews_for_book(id)?;
        for review in &reviews {
            store.delete_review(review.id)?;
        }
        store.delete_book(id)?;
        tracing::info!(id, reviews = reviews.len(), "book deleted");

        result.add_message(CmdMessage::success(format!(
            "Book deleted ({}): {}",
            id, book.title
        )));
        result.affected_books.push(book);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookDraft, NewReview};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_book_and_its_reviews() {
        let mut store = InMemoryStore::new();
        let doomed = store.add_book(BookDraft::new("Old", "A")).unwrap();
        let kept = store.add_book(BookDraft::new("New", "B")).unwrap();
        store.add_review(doomed.id, NewReview::new("Ann", 2, "")).unwrap();
        store.add_review(kept.id, NewReview::new("Bob", 5, "")).unwrap();

        let result = run(&mut store, &[doomed.id]).unwrap();
        assert_eq!(result.affected_books[0].id, doomed.id);

        let books = store.list_books().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, kept.id);
        let reviews = store.list_reviews().unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].book_id, kept.id);
    }

    #[test]
    fn stops_at_first_unknown_id() {
        let mut store = InMemoryStore::new();
        let book = store.add_book(BookDraft::new("Only", "A")).unwrap();
        assert!(run(&mut store, &[42, book.id]).is_err());
        assert_eq!(store.list_books().unwrap().len(), 1);
    }
}
