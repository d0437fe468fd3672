use crate::error::{Result, ShelfError};
use crate::model::{Book, BookDraft, NewReview, MAX_RATING, MIN_RATING};

/// A book needs a title and an author; everything else may be blank.
pub fn validate_draft(draft: &BookDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(ShelfError::Api("Title cannot be empty".into()));
    }
    if draft.author.trim().is_empty() {
        return Err(ShelfError::Api("Author cannot be empty".into()));
    }
    Ok(())
}

pub fn validate_book(book: &Book) -> Result<()> {
    validate_draft(&BookDraft::from(book.clone()))
}

pub fn validate_review(review: &NewReview) -> Result<()> {
    if review.name.trim().is_empty() {
        return Err(ShelfError::Api("Reviewer name cannot be empty".into()));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&review.rating) {
        return Err(ShelfError::Api(format!(
            "Rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, review.rating
        )));
    }
    Ok(())
}

/// Trims surrounding whitespace from the free-text fields.
pub fn normalize_draft(mut draft: BookDraft) -> BookDraft {
    draft.title = draft.title.trim().to_string();
    draft.author = draft.author.trim().to_string();
    draft.description = draft.description.trim().to_string();
    draft.img = draft.img.trim().to_string();
    draft
}
