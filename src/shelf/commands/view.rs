use crate::commands::{BookDetail, CmdResult};
use crate::engine;
use crate::error::Result;
use crate::model::BookId;
use crate::store::CatalogSource;

pub fn run<S: CatalogSource>(store: &S, id: BookId) -> Result<CmdResult> {
    let book = store.get_book(id)?;
    let reviews = store.reviews_for_book(id)?;
    let average_rating = engine::average_rating(&reviews);
    Ok(CmdResult::default().with_detail(BookDetail {
        book,
        reviews,
        average_rating,
    }))
}
