use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Genre;
use crate::store::CatalogSource;

/// Counts books per genre, in the fixed genre order.
pub fn run<S: CatalogSource>(store: &S) -> Result<CmdResult> {
    let books = store.list_books()?;
    let mut result = CmdResult::default();
    result.genre_counts = Genre::ALL
        .iter()
        .map(|&genre| (genre, books.iter().filter(|b| b.genre == genre).count()))
        .collect();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookDraft};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn counts_every_genre() {
        let books = vec![
            Book::from_draft(1, BookDraft::new("A", "X").with_genre(Genre::Fantasy)),
            Book::from_draft(4, BookDraft::new("B", "Y").with_genre(Genre::Fantasy)),
            Book::from_draft(9, BookDraft::new("C", "Z")),
        ];
        let store = InMemoryStore::with_records(books, Vec::new());

        let counts = run(&store).unwrap().genre_counts;
        assert_eq!(counts.len(), Genre::ALL.len());
        assert!(counts.contains(&(Genre::Fantasy, 2)));
        assert!(counts.contains(&(Genre::Other, 1)));
        assert!(counts.contains(&(Genre::Poetry, 0)));
    }
}
