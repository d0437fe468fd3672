//! Progressive reveal of a filtered list.
//!
//! A [`Window`] is always a prefix of the list it was cut from. It starts at one
//! page and grows by one page per [`extend_window`] call until it covers the
//! whole list. Growing never reorders or skips entries.

/// Page size used when the caller does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 30;

#[derive(Debug, PartialEq, Eq)]
pub struct Window<'a, T> {
    pub visible: &'a [T],
    pub has_more: bool,
}

impl<T> Clone for Window<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Window<'_, T> {}

impl<'a, T> Window<'a, T> {
    fn prefix(filtered: &'a [T], len: usize) -> Self {
        let len = len.min(filtered.len());
        Self {
            visible: &filtered[..len],
            has_more: len < filtered.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// The first `min(page_size, filtered.len())` entries.
///
/// A page size of zero is treated as one so the window can always grow.
pub fn initial_window<T>(filtered: &[T], page_size: usize) -> Window<'_, T> {
    Window::prefix(filtered, page_size.max(1))
}

/// `visible` plus the next page of `filtered`.
///
/// `visible` must be a prefix of `filtered`; only its length is consulted. Once
/// the window covers the whole list the call returns the same window with
/// `has_more == false`, so repeated calls are no-ops.
pub fn extend_window<'a, T>(filtered: &'a [T], visible: &[T], page_size: usize) -> Window<'a, T> {
    let shown = visible.len().min(filtered.len());
    Window::prefix(filtered, shown.saturating_add(page_size.max(1)))
}
