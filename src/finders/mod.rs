//! Finders module
//!
//! Adapters that turn a query layer into a paginated source.
//!
//! # Overview
//!
//! The finders module provides:
//! - `PaginateArgs` - Page, per_page and total as given by the caller
//! - `paginate_slice` / `Paginate` - Pagination of in-memory slices
//! - `Criteria` / `PaginatedCriteria` - Chainable document-store queries
//! - `SqlFinder` / `SqlQuery` - `LIMIT`/`OFFSET` pagination on DuckDB
//!
//! Page and per_page accept integers or numeric strings; the default
//! per_page comes from [`PaginateConfig`](crate::config::PaginateConfig).

mod array;
mod criteria;
mod sql;
mod types;

pub use array::{paginate_slice, Paginate};
pub use criteria::{
    Criteria, Document, DocumentSource, MemoryStore, PaginatedCriteria, Query, QueryOptions,
    SortOrder,
};
pub use sql::{SqlFinder, SqlQuery, DEFAULT_MODEL_NAME};
pub use types::PaginateArgs;
