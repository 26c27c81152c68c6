//! Pagination collection module
//!
//! Holds one page of items together with the page metadata.
//!
//! # Overview
//!
//! The collection module provides:
//! - `Paginated` - The capability contract every paginated source implements
//! - `Collection` - An owned page of items with current page, page size and total count
//!
//! Everything the link renderer needs (total pages, offset, previous and next
//! page) is derived from `current_page`, `per_page` and `total_entries`.

mod paginated;
mod types;

pub use paginated::Paginated;
pub use types::Collection;

#[cfg(test)]
mod tests;
