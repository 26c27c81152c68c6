// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Solidafy Paginate
//!
//! Page-based pagination for Rust collections, document-store queries and
//! SQL, plus the view helpers that turn a page into navigation links.
//!
//! ## Features
//!
//! - **Paginated Collections**: A page of items with total, offset and page arithmetic
//! - **Finders**: Slices, chainable document criteria and DuckDB SQL queries
//! - **Link Rendering**: Previous/next controls, windowed page numbers and gaps
//! - **Request-Aware URLs**: Current query parameters are kept, nested names supported
//! - **Entries Info**: "Displaying posts 6 - 10 of 23 in total"
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_paginate::finders::{Paginate, PaginateArgs};
//! use solidafy_paginate::view::{will_paginate, RequestContext};
//! use solidafy_paginate::PaginateConfig;
//!
//! let config = PaginateConfig::default();
//! let context = RequestContext::parse(Method::GET, "/posts?page=2")?;
//! let args = PaginateArgs::new().page(2).per_page(5);
//! let page = posts.paginate(&args, &config)?;
//!
//! if let Some(html) = will_paginate(&page, &config.view, &context)? {
//!     println!("{html}");
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Paginated (trait)                         │
//! │  current_page  per_page  total_entries  total_pages  offset    │
//! └────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴───────┬─────────────────────────┐
//! │   Finders     │     Collection       │         View            │
//! ├───────────────┼──────────────────────┼─────────────────────────┤
//! │ Slice         │ items + metadata     │ LinkRenderer            │
//! │ Criteria      │ total inference      │ InnerOuterWindow        │
//! │ DuckDB SQL    │                      │ RequestContext / params │
//! └───────────────┴──────────────────────┴─────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination configuration
pub mod config;

/// Paginated collections and the `Paginated` contract
pub mod collection;

/// Nested request parameters
pub mod params;

/// Template interpolation
pub mod template;

/// Link rendering view helpers
pub mod view;

/// Paginating finders for slices, document criteria and SQL
pub mod finders;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use collection::{Collection, Paginated};
pub use config::PaginateConfig;
pub use finders::{Paginate, PaginateArgs};
pub use view::{page_entries_info, will_paginate, LinkRenderer, RenderOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
