//! The `Paginated` capability contract

use crate::types::PageNumber;

/// Anything that can describe itself as one page of a larger result set
///
/// Implementors provide the four raw facts; the page arithmetic is shared.
pub trait Paginated {
    /// The current 1-based page
    fn current_page(&self) -> PageNumber;

    /// Number of items per page (always > 0)
    fn per_page(&self) -> u64;

    /// Total number of items across all pages
    ///
    /// Sources where counting is expensive compute this once and cache it.
    fn total_entries(&self) -> u64;

    /// Name of the item type (e.g. `"Post"`), used for generated ids and messages
    fn item_type_name(&self) -> &str;

    /// Total number of pages, at least 1
    fn total_pages(&self) -> u64 {
        total_pages(self.total_entries(), self.per_page())
    }

    /// Number of items skipped before the current page
    fn offset(&self) -> u64 {
        (self.current_page().get() - 1).saturating_mul(self.per_page())
    }

    /// The previous page, or `None` on the first page
    fn previous_page(&self) -> Option<PageNumber> {
        self.current_page().previous()
    }

    /// The next page, or `None` on (or past) the last page
    fn next_page(&self) -> Option<PageNumber> {
        let next = self.current_page().next();
        (next.get() <= self.total_pages()).then_some(next)
    }

    /// Whether the current page lies beyond the last page
    fn out_of_bounds(&self) -> bool {
        self.current_page().get() > self.total_pages()
    }
}

/// `max(1, ceil(total_entries / per_page))`
pub(crate) fn total_pages(total_entries: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 1;
    }
    total_entries.div_ceil(per_page).max(1)
}

/// Short name of a Rust type: `my_app::models::Post` becomes `Post`
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
