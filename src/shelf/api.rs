//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! catalog operation, whatever UI sits on top.
//!
//! The facade dispatches to `commands/*.rs`, fills in settings the caller should
//! not have to repeat (the configured page size), and returns structured
//! `Result<CmdResult>` values. It does no printing and holds no business logic.
//!
//! `ShelfApi<S: CatalogSource>` is generic over the record source:
//! `ShelfApi<FileStore>` in the binary, `ShelfApi<InMemoryStore>` in tests.
//!
//! Tests here check dispatch only. Command logic is tested in the command
//! modules, storage behavior in the store modules.

use crate::browse::BrowseSession;
use crate::commands;
use crate::config::ShelfConfig;
use crate::engine::FilterCriteria;
use crate::error::Result;
use crate::model::{BookDraft, BookId, BookUpdate, NewReview, ReviewId};
use crate::store::CatalogSource;
use std::path::PathBuf;

pub struct ShelfApi<S: CatalogSource> {
    store: S,
    paths: commands::ShelfPaths,
    config: ShelfConfig,
}

impl<S: CatalogSource> ShelfApi<S> {
    pub fn new(store: S, paths: commands::ShelfPaths, config: ShelfConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn list_books(
        &self,
        criteria: &FilterCriteria,
        reveal: Reveal,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, criteria, reveal, self.config.page_size())
    }

    /// Starts an interactive browse over a snapshot of the catalog.
    pub fn browse(&self, criteria: FilterCriteria) -> Result<BrowseSession> {
        let books = self.store.list_books()?;
        Ok(BrowseSession::new(books, self.config.page_size()).with_criteria(criteria))
    }

    pub fn view_book(&self, id: BookId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn add_book(&mut self, draft: BookDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_book(&mut self, id: BookId, update: &BookUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_books(&mut self, ids: &[BookId]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn add_review(&mut self, book_id: BookId, review: NewReview) -> Result<commands::CmdResult> {
        commands::reviews::add(&mut self.store, book_id, review)
    }

    pub fn delete_review(&mut self, id: ReviewId) -> Result<commands::CmdResult> {
        commands::reviews::delete(&mut self.store, id)
    }

    pub fn list_reviews(&self, book_id: BookId) -> Result<commands::CmdResult> {
        commands::reviews::list(&self.store, book_id)
    }

    pub fn import_books(&mut self, paths: Vec<PathBuf>) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, paths)
    }

    pub fn genres(&self) -> Result<commands::CmdResult> {
        commands::genres::run(&self.store)
    }

    /// Runs a config action. A successful `Set` also takes effect for this API.
    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn settings(&self) -> &ShelfConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::Reveal;
pub use crate::commands::{
    BookDetail, CmdMessage, CmdResult, Listing, MessageLevel, ShelfPaths,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::PageRequest;
    use crate::error::ShelfError;
    use crate::model::Genre;
    use crate::store::memory::InMemoryStore;

    fn api(dir: &tempfile::TempDir) -> ShelfApi<InMemoryStore> {
        ShelfApi::new(
            InMemoryStore::new(),
            ShelfPaths {
                data_dir: dir.path().to_path_buf(),
            },
            ShelfConfig::default(),
        )
    }

    #[test]
    fn add_view_delete_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api(&dir);

        let added = api.add_book(BookDraft::new("Dune", "Frank Herbert")).unwrap();
        let id = added.affected_books[0].id;

        api.add_review(id, NewReview::new("Ann", 4, "")).unwrap();
        let detail = api.view_book(id).unwrap().detail.unwrap();
        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(api.list_reviews(id).unwrap().reviews.len(), 1);

        api.delete_books(&[id]).unwrap();
        assert!(matches!(api.view_book(id), Err(ShelfError::BookNotFound(_))));
    }

    #[test]
    fn list_uses_configured_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api(&dir);
        for i in 0..7 {
            api.add_book(BookDraft::new(format!("Book {}", i), "A")).unwrap();
        }
        api.config(ConfigAction::Set("page-size".into(), "3".into()))
            .unwrap();
        assert_eq!(api.settings().page_size, 3);

        let listing = api
            .list_books(&FilterCriteria::default(), Reveal::default())
            .unwrap()
            .listing
            .unwrap();
        assert_eq!(listing.books.len(), 3);
        assert!(listing.has_more);
    }

    #[test]
    fn browse_starts_at_first_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api(&dir);
        for i in 0..40 {
            let genre = if i % 2 == 0 { Genre::Fantasy } else { Genre::Poetry };
            api.add_book(BookDraft::new(format!("Book {}", i), "A").with_genre(genre))
                .unwrap();
        }

        let mut session = api
            .browse(FilterCriteria::new().with_genre(Genre::Fantasy))
            .unwrap();
        assert_eq!(session.filtered_len(), 20);
        assert_eq!(session.visible_len(), 20);
        assert_eq!(
            session.request_next_page(session.generation()),
            PageRequest::Exhausted
        );
    }

    #[test]
    fn update_import_and_genres_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api(&dir);
        let id = api.add_book(BookDraft::new("Emma", "Jane Austen")).unwrap().affected_books[0].id;

        let update = BookUpdate {
            genre: Some(Genre::Classic),
            ..Default::default()
        };
        api.update_book(id, &update).unwrap();

        let file = dir.path().join("more.json");
        std::fs::write(&file, r#"[{"title": "Beowulf", "author": "Unknown", "genres": "poetry"}]"#)
            .unwrap();
        api.import_books(vec![file]).unwrap();

        let counts = api.genres().unwrap().genre_counts;
        assert!(counts.contains(&(Genre::Classic, 1)));
        assert!(counts.contains(&(Genre::Poetry, 1)));
    }
}
