//! Page window algorithms
//!
//! Decide which page numbers to show around the current page, and where
//! to put gap markers for the skipped ranges.

use crate::types::PageNumber;
use serde::Serialize;

/// One entry of the pagination link sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PaginationItem {
    /// A page number
    Page(PageNumber),
    /// An ellipsis standing in for skipped pages
    Gap,
    /// The "previous page" control
    PreviousPage,
    /// The "next page" control
    NextPage,
}

/// Strategy for choosing the visible page numbers
pub trait WindowAlgorithm {
    /// Page numbers (and gaps) to show for `current` out of `total_pages`
    fn page_numbers(&self, current: PageNumber, total_pages: u64) -> Vec<PaginationItem>;
}

/// A window of `inner_window` pages on each side of the current page,
/// plus `outer_window` pages at each end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InnerOuterWindow {
    /// Pages shown on each side of the current page
    pub inner_window: u32,
    /// Pages shown after the first page and before the last page
    pub outer_window: u32,
}

impl InnerOuterWindow {
    /// Create a new window
    pub fn new(inner_window: u32, outer_window: u32) -> Self {
        Self {
            inner_window,
            outer_window,
        }
    }
}

impl Default for InnerOuterWindow {
    fn default() -> Self {
        Self::new(4, 1)
    }
}

impl WindowAlgorithm for InnerOuterWindow {
    fn page_numbers(&self, current: PageNumber, total_pages: u64) -> Vec<PaginationItem> {
        let total = i128::from(total_pages.max(1));
        // any page past the end yields the same window as the last page
        let current = i128::from(current.get()).min(total);
        let inner = i128::from(self.inner_window);
        let outer = i128::from(self.outer_window);

        let mut window_from = current - inner;
        let mut window_to = current + inner;

        // shift the window back inside [1, total]
        if window_to > total {
            window_from -= window_to - total;
            window_to = total;
        }
        if window_from < 1 {
            window_to += 1 - window_from;
            window_from = 1;
            window_to = window_to.min(total);
        }

        let mut pages: Vec<Option<i128>> = Vec::new();

        if outer + 3 < window_from {
            pages.extend((1..=outer + 1).map(Some));
            pages.push(None);
        } else {
            pages.extend((1..window_from).map(Some));
        }

        pages.extend((window_from..=window_to).map(Some));

        if total - outer - 2 > window_to {
            pages.push(None);
            pages.extend((total - outer..=total).map(Some));
        } else {
            pages.extend((window_to + 1..=total).map(Some));
        }

        tracing::trace!(
            %current,
            %total,
            %window_from,
            %window_to,
            "Computed page window"
        );

        pages
            .into_iter()
            .map(|page| {
                match page
                    .and_then(|p| u64::try_from(p).ok())
                    .and_then(|p| PageNumber::new(p).ok())
                {
                    Some(page) => PaginationItem::Page(page),
                    None => PaginationItem::Gap,
                }
            })
            .collect()
    }
}

/// The full item sequence: previous control, page numbers (if enabled), next control
pub fn pagination_items(
    window: &dyn WindowAlgorithm,
    current: PageNumber,
    total_pages: u64,
    page_links: bool,
) -> Vec<PaginationItem> {
    let mut items = vec![PaginationItem::PreviousPage];
    if page_links {
        items.extend(window.page_numbers(current, total_pages));
    }
    items.push(PaginationItem::NextPage);
    items
}
