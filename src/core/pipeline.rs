use crate::core::filter::{apply_filters, Filters};
use crate::core::paginate::paginate;
use crate::core::search::search;
use crate::core::sort::{sort_items, SortKey};
use crate::domain::ports::ContentItem;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Everything the pipeline needs besides the items themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineQuery {
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PipelineQuery {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            query: String::new(),
            sort: SortKey::default(),
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// Output of one pipeline run. Borrows from the source collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<'a, T> {
    pub visible_items: Vec<&'a T>,
    /// Matches after filter and search, before slicing.
    pub total_count: usize,
    pub total_pages: usize,
    /// The page actually served, after clamping.
    pub page: usize,
}

/// Filter → search → sort → paginate. Pure: same inputs, same output.
pub fn run_pipeline<'a, T: ContentItem>(
    items: &'a [T],
    query: &PipelineQuery,
) -> PageResult<'a, T> {
    let filtered = apply_filters(items, &query.filters);
    let searched = search(filtered, &query.query);
    let sorted = sort_items(searched, query.sort);
    let (visible, window) = paginate(&sorted, query.page, query.page_size);

    tracing::debug!(
        "Pipeline: {} items -> {} matches, page {}/{}, sort {}",
        items.len(),
        sorted.len(),
        window.page,
        window.total_pages,
        query.sort
    );

    PageResult {
        visible_items: visible.to_vec(),
        total_count: sorted.len(),
        total_pages: window.total_pages,
        page: window.page,
    }
}

/// Caller-owned browse state for one section.
///
/// Any change to filters, query or sort sends the caller back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    query: PipelineQuery,
    default_sort: SortKey,
}

impl BrowseState {
    pub fn new(page_size: usize, default_sort: SortKey) -> Self {
        Self {
            query: PipelineQuery {
                sort: default_sort,
                page_size,
                ..PipelineQuery::default()
            },
            default_sort,
        }
    }

    pub fn query(&self) -> &PipelineQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.query.page
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.query.query {
            self.query.query = text;
            self.query.page = 1;
        }
    }

    pub fn select_filter(&mut self, group: &str, value: &str) {
        if self.query.filters.select(group, value) {
            self.query.page = 1;
        }
    }

    pub fn toggle_filter(&mut self, group: &str, value: &str) {
        self.query.filters.toggle(group, value);
        self.query.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.query.filters.clear();
        self.query.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if sort != self.query.sort {
            self.query.sort = sort;
            self.query.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }

    /// Back to defaults, as on navigation away and back.
    pub fn reset(&mut self) {
        *self = Self::new(self.query.page_size, self.default_sort);
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, SortKey::default())
    }
}
