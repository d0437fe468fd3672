use crate::model::{Book, Genre, SizeClass};
use std::collections::BTreeSet;

/// Inclusive bound on a book's release year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// An inverted range (`min > max`) contains nothing.
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// The smallest range covering every dated record, or `None` if no record
    /// carries a release date.
    pub fn spanning<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Book>,
    {
        records
            .into_iter()
            .filter_map(Book::release_year)
            .fold(None, |acc, year| match acc {
                None => Some(YearRange::new(year, year)),
                Some(r) => Some(YearRange::new(r.min.min(year), r.max.max(year))),
            })
    }
}

/// The user's current selection for one view of the catalog.
///
/// Empty `genres` and `sizes` sets place no restriction. `years: None` places
/// no restriction either; with `Some(range)` a book must carry a release date
/// inside the range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub genres: BTreeSet<Genre>,
    pub sizes: BTreeSet<SizeClass>,
    pub years: Option<YearRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genres.insert(genre);
        self
    }

    pub fn with_genres<I: IntoIterator<Item = Genre>>(mut self, genres: I) -> Self {
        self.genres.extend(genres);
        self
    }

    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.sizes.insert(size);
        self
    }

    pub fn with_sizes<I: IntoIterator<Item = SizeClass>>(mut self, sizes: I) -> Self {
        self.sizes.extend(sizes);
        self
    }

    pub fn with_years(mut self, range: YearRange) -> Self {
        self.years = Some(range);
        self
    }

    /// True when no filter is active and every record matches.
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty()
            && self.genres.is_empty()
            && self.sizes.is_empty()
            && self.years.is_none()
    }
}
