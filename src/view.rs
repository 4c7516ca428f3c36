//! The view pipeline: filter → paginate.
//!
//! Given the catalog and an explicit [`ViewState`], the pipeline computes
//! which items are visible after each of the two user-facing transitions:
//!
//! - [`ViewState::apply_filter`] — select a filter, *replacing* the visible
//!   set with the first page of the filtered sequence.
//! - [`ViewState::load_more`] — materialize the next page, *appending* to
//!   the visible set.
//!
//! Both return a [`PageSlice`]: the items plus a flag telling the caller
//! whether a "load more" affordance should stay available.
//!
//! The state is an explicit value rather than ambient globals so the
//! transitions are plain synchronous functions, testable without any
//! presentation layer. There are no error returns anywhere in the pipeline:
//! filters are a closed enumeration with a total parse, and paging past the
//! end is a no-op, not a failure.

use crate::catalog::Catalog;
use crate::types::{Filter, GalleryItem};

/// Items per page. Matches the grid's visual density; overridable in config.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// One page of a filtered result, plus whether more pages remain.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a> {
    /// Items in catalog construction order.
    pub items: Vec<&'a GalleryItem>,
    /// True when items remain past this slice for the active filter.
    pub more_available: bool,
}

impl PageSlice<'_> {
    fn empty() -> Self {
        PageSlice {
            items: Vec::new(),
            more_available: false,
        }
    }
}

/// Pagination state for the currently selected filter.
///
/// `page_cursor` counts pages already materialized: 1 right after a filter
/// is applied (the first page is visible), incremented by each successful
/// load-more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_filter: Filter,
    page_cursor: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Fresh state: "all" filter, one page materialized.
    ///
    /// A zero `page_size` is clamped to 1 — the page size is an invariant
    /// of the state, not an error surface.
    pub fn new(page_size: usize) -> Self {
        ViewState {
            active_filter: Filter::All,
            page_cursor: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    pub fn page_cursor(&self) -> usize {
        self.page_cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Select a filter. Resets the cursor and returns the first page of the
    /// newly filtered sequence — a full replace of the visible set.
    pub fn apply_filter<'a>(&mut self, catalog: &'a Catalog, filter: Filter) -> PageSlice<'a> {
        self.active_filter = filter;
        self.page_cursor = 1;

        let filtered = catalog.by_category(filter);
        let more_available = filtered.len() > self.page_size;
        let mut items = filtered;
        items.truncate(self.page_size);

        PageSlice {
            items,
            more_available,
        }
    }

    /// Materialize the next page for the active filter — an append to the
    /// visible set.
    ///
    /// Advances the cursor only when the slice is non-empty. Once the
    /// filtered sequence is exhausted, further calls return an empty slice
    /// and leave the state untouched.
    pub fn load_more<'a>(&mut self, catalog: &'a Catalog) -> PageSlice<'a> {
        let filtered = catalog.by_category(self.active_filter);
        let start = self.page_cursor * self.page_size;
        if start >= filtered.len() {
            return PageSlice::empty();
        }

        let end = (start + self.page_size).min(filtered.len());
        let more_available = end < filtered.len();
        let items = filtered[start..end].to_vec();
        self.page_cursor += 1;

        PageSlice {
            items,
            more_available,
        }
    }
}
