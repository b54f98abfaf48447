//! Pagination utilities for bandex-ui

/// Default page size when the request does not specify a limit
pub const DEFAULT_LIMIT: i64 = 10;

/// Sanitized pagination window for one request
#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    /// Current page number (1-indexed)
    pub page: i64,
    /// Rows per page
    pub limit: i64,
    /// Offset for SQL LIMIT/OFFSET query
    pub offset: i64,
}

/// Calculate the pagination window from requested page and limit.
///
/// Non-positive values are sanitized to 1. An out-of-range page is not
/// clamped: it simply yields an empty page while `total` still reports the
/// full match count.
///
/// # Examples
/// ```
/// use bandex_ui::pagination::page_window;
///
/// let w = page_window(2, 10);
/// assert_eq!(w.page, 2);
/// assert_eq!(w.offset, 10);
///
/// // Non-positive input is sanitized
/// let w = page_window(0, -5);
/// assert_eq!(w.page, 1);
/// assert_eq!(w.limit, 1);
/// assert_eq!(w.offset, 0);
/// ```
pub fn page_window(requested_page: i64, requested_limit: i64) -> PageWindow {
    let page = requested_page.max(1);
    let limit = requested_limit.max(1);
    // Both values come straight from query parameters; saturate instead of
    // overflowing on absurd page/limit combinations.
    let offset = (page - 1).saturating_mul(limit);

    PageWindow { page, limit, offset }
}
