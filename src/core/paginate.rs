use serde::Serialize;

/// A clamped window into a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// 1-based, always within `1..=total_pages`.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Computes the slice bounds for `page`. Out-of-range pages are clamped to
/// the nearest valid one; a zero page size is treated as 1.
pub fn page_window(total: usize, page: usize, page_size: usize) -> PageWindow {
    if page_size == 0 {
        tracing::debug!("Page size 0 requested, using 1");
    }
    let page_size = page_size.max(1);
    let total_pages = total_pages(total, page_size);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    PageWindow {
        page,
        page_size,
        total_pages,
        start,
        end,
    }
}

pub fn paginate<X>(items: &[X], page: usize, page_size: usize) -> (&[X], PageWindow) {
    let window = page_window(items.len(), page, page_size);
    (&items[window.start..window.end], window)
}
