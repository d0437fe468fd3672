use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookDraft;
use crate::store::CatalogSource;

use super::helpers::{normalize_draft, validate_draft};

pub fn run<S: CatalogSource>(store: &mut S, draft: BookDraft) -> Result<CmdResult> {
    let draft = normalize_draft(draft);
    validate_draft(&draft)?;

    let book = store.add_book(draft)?;
    tracing::info!(id = book.id, title = %book.title, "book added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
