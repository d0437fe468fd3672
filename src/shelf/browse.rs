//! # Browse Session
//!
//! The engine is stateless; a view is not. [`BrowseSession`] holds the one piece
//! of state a catalog view has, "the filtered list and visible window for the
//! current criteria", and recomputes it wholesale whenever criteria change.
//!
//! ## Next-Page Requests
//!
//! The UI decides *when* more content is wanted (scroll proximity, a key press,
//! an Enter on stdin). It reports that as a single event, [`BrowseSession::request_next_page`],
//! tagged with the [`Generation`] it observed. Every criteria change bumps the
//! generation, so a request that was issued before the change is recognized as
//! stale and ignored instead of extending a window that no longer exists.

use crate::engine::{self, FilterCriteria};
use crate::model::Book;

/// Identifies one criteria state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Outcome of a next-page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// The window grew by `added` records.
    Extended { added: usize },
    /// The window already covered every filtered record.
    Exhausted,
    /// The request referred to criteria that have since been replaced.
    Stale,
}

#[derive(Debug, Clone)]
pub struct BrowseSession {
    records: Vec<Book>,
    criteria: FilterCriteria,
    page_size: usize,
    filtered: Vec<usize>,
    visible_len: usize,
    generation: Generation,
}

impl BrowseSession {
    pub fn new(records: Vec<Book>, page_size: usize) -> Self {
        let mut session = Self {
            records,
            criteria: FilterCriteria::default(),
            page_size: page_size.max(1),
            filtered: Vec::new(),
            visible_len: 0,
            generation: Generation(0),
        };
        session.recompute();
        session
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.set_criteria(criteria);
        self
    }

    /// Replaces the criteria, recomputes the filtered list, and resets the
    /// window to its first page. Returns the new generation.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> Generation {
        self.criteria = criteria;
        self.generation = Generation(self.generation.0 + 1);
        self.recompute();
        self.generation
    }

    /// Applies `edit` to a copy of the current criteria and installs the result.
    pub fn update_criteria<F>(&mut self, edit: F) -> Generation
    where
        F: FnOnce(FilterCriteria) -> FilterCriteria,
    {
        let next = edit(self.criteria.clone());
        self.set_criteria(next)
    }

    pub fn request_next_page(&mut self, seen: Generation) -> PageRequest {
        if seen != self.generation {
            tracing::debug!(?seen, current = ?self.generation, "ignoring stale page request");
            return PageRequest::Stale;
        }

        let shown = &self.filtered[..self.visible_len];
        let next_len = engine::extend_window(&self.filtered, shown, self.page_size).len();
        let added = next_len - self.visible_len;
        self.visible_len = next_len;

        if added == 0 {
            PageRequest::Exhausted
        } else {
            PageRequest::Extended { added }
        }
    }

    pub fn visible(&self) -> Vec<&Book> {
        self.filtered[..self.visible_len]
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    /// Records revealed by the most recent page request, i.e. the last `added`
    /// entries of [`visible`](Self::visible).
    pub fn last_page(&self, added: usize) -> Vec<&Book> {
        let start = self.visible_len.saturating_sub(added);
        self.filtered[start..self.visible_len]
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_more(&self) -> bool {
        self.visible_len < self.filtered.len()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    fn recompute(&mut self) {
        self.filtered = engine::filtered_positions(&self.records, &self.criteria);
        self.visible_len = engine::initial_window(&self.filtered, self.page_size).len();
        tracing::debug!(
            matched = self.filtered.len(),
            visible = self.visible_len,
            "browse session recomputed"
        );
    }
}
