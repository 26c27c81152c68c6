//! View helpers module
//!
//! Renders pagination links for a paginated source.
//!
//! # Overview
//!
//! The view module provides:
//! - `LinkRenderer` - Builds typed links or an HTML fragment for one request
//! - `RenderContext` / `RequestContext` - Request parameters and URL building
//! - `WindowAlgorithm` / `InnerOuterWindow` - Which page numbers to show
//! - `RenderOptions` - Labels, separator, container and parameter settings
//! - `will_paginate` / `page_entries_info` - One-call helpers for templates
//!
//! ```text
//! <div class="pagination"><a class="previous_page" rel="prev start" href="/posts?page=1">&#8592; Previous</a>
//! <a rel="prev start" href="/posts?page=1">1</a> <em>2</em> <a rel="next" href="/posts?page=3">3</a> ...</div>
//! ```

mod context;
mod entries_info;
mod html;
mod inflect;
mod options;
mod renderer;
mod window;

pub use context::{RenderContext, RequestContext};
pub use entries_info::{page_entries_info, EntriesInfoTemplates, ENTRIES_INFO_VARIABLES};
pub use html::{escape_html, tag};
pub use inflect::{pluralize, underscore};
pub use options::{ContainerId, RenderOptions, PAGINATION_OPTION_KEYS};
pub use renderer::{container_id_for, will_paginate, ControlLink, LinkRenderer, PageLink};
pub use window::{pagination_items, InnerOuterWindow, PaginationItem, WindowAlgorithm};
