use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BookId, BookUpdate};
use crate::store::CatalogSource;

use super::helpers::validate_book;

pub fn run<S: CatalogSource>(store: &mut S, id: BookId, update: &BookUpdate) -> Result<CmdResult> {
    let mut book = store.get_book(id)?;
    let mut result = CmdResult::default();

    if update.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for book {}",
            id
        )));
        result.affected_books.push(book);
        return Ok(result);
    }

    update.apply(&mut book);
    book.title = book.title.trim().to_string();
    book.author = book.author.trim().to_string();
    validate_book(&book)?;

    store.save_book(&book)?;
    tracing::info!(id = book.id, "book updated");

    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        book.id, book.title
    )));
    result.affected_books.push(book);
    Ok(result)
}
