use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BookId, NewReview, ReviewId};
use crate::store::CatalogSource;

use super::helpers::validate_review;

pub fn add<S: CatalogSource>(store: &mut S, book_id: BookId, review: NewReview) -> Result<CmdResult> {
    let book = store.get_book(book_id)?;
    let review = NewReview {
        name: review.name.trim().to_string(),
        comment: review.comment.trim().to_string(),
        ..review
    };
    validate_review(&review)?;

    let review = store.add_review(book.id, review)?;
    tracing::info!(id = review.id, book_id, rating = review.rating, "review added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Review added ({}) to {}: {}/5 by {}",
        review.id, book.title, review.rating, review.name
    )));
    Ok(result.with_reviews(vec![review]))
}

pub fn delete<S: CatalogSource>(store: &mut S, id: ReviewId) -> Result<CmdResult> {
    store.delete_review(id)?;
    tracing::info!(id, "review deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Review deleted ({})", id)));
    Ok(result)
}

pub fn list<S: CatalogSource>(store: &S, book_id: BookId) -> Result<CmdResult> {
    // Unknown books are an error, not an empty list.
    store.get_book(book_id)?;
    let reviews = store.reviews_for_book(book_id)?;
    let mut result = CmdResult::default();
    if reviews.is_empty() {
        result.add_message(CmdMessage::info("No reviews yet."));
    }
    Ok(result.with_reviews(reviews))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::model::BookDraft;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> (InMemoryStore, BookId) {
        let mut store = InMemoryStore::new();
        let book = store.add_book(BookDraft::new("Dune", "Frank Herbert")).unwrap();
        (store, book.id)
    }

    #[test]
    fn add_then_list() {
        let (mut store, id) = seeded();
        add(&mut store, id, NewReview::new(" Ann ", 4, "Sandy")).unwrap();
        let result = list(&store, id).unwrap();
        assert_eq!(result.reviews.len(), 1);
        assert_eq!(result.reviews[0].name, "Ann");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn add_to_missing_book_fails() {
        let (mut store, _) = seeded();
        assert!(matches!(
            add(&mut store, 50, NewReview::new("Ann", 4, "")),
            Err(ShelfError::BookNotFound(50))
        ));
        assert!(store.list_reviews().unwrap().is_empty());
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let (mut store, id) = seeded();
        assert!(add(&mut store, id, NewReview::new("Ann", 9, "")).is_err());
        assert!(store.list_reviews().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_review() {
        let (mut store, id) = seeded();
        let added = add(&mut store, id, NewReview::new("Ann", 3, "")).unwrap();
        delete(&mut store, added.reviews[0].id).unwrap();
        assert!(list(&store, id).unwrap().reviews.is_empty());
        assert!(matches!(
            delete(&mut store, added.reviews[0].id),
            Err(ShelfError::ReviewNotFound(_))
        ));
    }
}
