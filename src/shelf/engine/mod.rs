//! # Catalog View Engine
//!
//! A pure pipeline from a raw book collection and a [`FilterCriteria`] value to
//! the list a view presents:
//!
//! ```text
//! raw collection ──compute_filtered──▶ filtered ──initial_window──▶ visible
//!                                          │                          │
//!                                          └──────extend_window◀──────┘
//!                                               ("request next page")
//! ```
//!
//! ## Filter Semantics
//!
//! A book passes when **all** of these hold:
//!
//! | Filter | Passes when |
//! |--------|-------------|
//! | text   | lower-cased search is empty, or a substring of the lower-cased title or author |
//! | genre  | selected set is empty, or contains the book's genre |
//! | size   | selected set is empty, or contains the book's [`SizeClass`](crate::model::SizeClass) |
//! | year   | no range is set, or the book has a release date whose year is inside the range |
//!
//! An empty genre or size selection means "all", not "none".
//!
//! ## Guarantees
//!
//! - Output is an order-preserving subsequence of the input: no reordering,
//!   duplication, or fabrication.
//! - Every function here is pure. Nothing is cached between calls, so two
//!   views filtering different collections never interfere.
//! - Nothing fails. A record missing a field a filter needs is excluded by
//!   that filter and passes every other one.

pub mod criteria;
pub mod window;

pub use criteria::{FilterCriteria, YearRange};
pub use window::{extend_window, initial_window, Window, DEFAULT_PAGE_SIZE};

use crate::model::{Book, Review};

/// A [`FilterCriteria`] with the search text lower-cased once per pass.
struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    needle: String,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search.to_lowercase(),
        }
    }

    fn text_passes(&self, book: &Book) -> bool {
        self.needle.is_empty()
            || book.title.to_lowercase().contains(&self.needle)
            || book.author.to_lowercase().contains(&self.needle)
    }

    fn genre_passes(&self, book: &Book) -> bool {
        self.criteria.genres.is_empty() || self.criteria.genres.contains(&book.genre)
    }

    fn size_passes(&self, book: &Book) -> bool {
        self.criteria.sizes.is_empty() || self.criteria.sizes.contains(&book.size_class())
    }

    fn year_passes(&self, book: &Book) -> bool {
        match self.criteria.years {
            None => true,
            Some(range) => book.release_year().is_some_and(|y| range.contains(y)),
        }
    }

    fn matches(&self, book: &Book) -> bool {
        self.text_passes(book)
            && self.genre_passes(book)
            && self.size_passes(book)
            && self.year_passes(book)
    }
}

/// Whether a single book satisfies every active filter in `criteria`.
pub fn matches(book: &Book, criteria: &FilterCriteria) -> bool {
    Matcher::new(criteria).matches(book)
}

/// The books that satisfy `criteria`, in their original order.
pub fn compute_filtered<'a>(records: &'a [Book], criteria: &FilterCriteria) -> Vec<&'a Book> {
    let matcher = Matcher::new(criteria);
    let filtered: Vec<&Book> = records.iter().filter(|b| matcher.matches(b)).collect();
    tracing::debug!(
        total = records.len(),
        matched = filtered.len(),
        "filtered catalog"
    );
    filtered
}

/// Positions in `records` of the books that satisfy `criteria`, ascending.
pub fn filtered_positions(records: &[Book], criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = Matcher::new(criteria);
    records
        .iter()
        .enumerate()
        .filter(|(_, b)| matcher.matches(b))
        .map(|(i, _)| i)
        .collect()
}

/// Arithmetic mean of the ratings, or `0.0` when there are none.
///
/// No rounding is applied; display code decides the precision.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u64 = reviews.iter().map(|r| u64::from(r.rating)).sum();
    total as f64 / reviews.len() as f64
}
