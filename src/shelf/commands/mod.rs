use crate::config::ShelfConfig;
use crate::engine::YearRange;
use crate::model::{Book, Genre, Review};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod genres;
pub mod helpers;
pub mod import;
pub mod list;
pub mod reviews;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// The visible part of a filtered catalog.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Visible window, in catalog order.
    pub books: Vec<Book>,
    /// Number of books that passed the filters.
    pub matched: usize,
    /// Number of books in the catalog before filtering.
    pub catalog_size: usize,
    pub has_more: bool,
    /// Release years covered by the dated books of the whole catalog.
    pub year_span: Option<YearRange>,
}

/// A book's detail page.
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: Book,
    pub reviews: Vec<Review>,
    /// Unrounded mean rating, `0.0` without reviews.
    pub average_rating: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listing: Option<Listing>,
    pub detail: Option<BookDetail>,
    pub reviews: Vec<Review>,
    pub genre_counts: Vec<(Genre, usize)>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_detail(mut self, detail: BookDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}
