use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::engine::{self, FilterCriteria, YearRange};
use crate::error::Result;
use crate::store::CatalogSource;

/// How much of the filtered list to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// The first `n` pages (at least one).
    Pages(usize),
    All,
}

impl Default for Reveal {
    fn default() -> Self {
        Reveal::Pages(1)
    }
}

pub fn run<S: CatalogSource>(
    store: &S,
    criteria: &FilterCriteria,
    reveal: Reveal,
    page_size: usize,
) -> Result<CmdResult> {
    let books = store.list_books()?;
    let filtered = engine::compute_filtered(&books, criteria);

    let mut window = engine::initial_window(&filtered, page_size);
    match reveal {
        Reveal::All => {
            while window.has_more {
                window = engine::extend_window(&filtered, window.visible, page_size);
            }
        }
        Reveal::Pages(pages) => {
            for _ in 1..pages.max(1) {
                if !window.has_more {
                    break;
                }
                window = engine::extend_window(&filtered, window.visible, page_size);
            }
        }
    }

    let listing = Listing {
        books: window.visible.iter().map(|&b| b.clone()).collect(),
        matched: filtered.len(),
        catalog_size: books.len(),
        has_more: window.has_more,
        year_span: YearRange::spanning(&books),
    };

    let mut result = CmdResult::default();
    if !criteria.is_unrestricted() {
        result.add_message(CmdMessage::info(format!(
            "{} of {} books match.",
            listing.matched, listing.catalog_size
        )));
    }
    if listing.has_more {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} matching books.",
            listing.books.len(),
            listing.matched
        )));
    }
    Ok(result.with_listing(listing))
}
