//! Request parameter module
//!
//! Nested parameter maps as used in query strings: `sort=name&list[page]=2`
//! becomes `{"sort": "name", "list": {"page": "2"}}`.
//!
//! # Overview
//!
//! The params module provides:
//! - `stringified_merge` - Deep-merge of two parameter maps
//! - `parse_nested_query` / `nest_param` / `find_param` - Bracketed names to nested maps
//! - `to_query` - Nested maps back to a sorted, percent-encoded query string

mod merge;
mod query;

pub use merge::stringified_merge;
pub use query::{find_param, is_simple_param_name, nest_param, parse_nested_query, to_query};
