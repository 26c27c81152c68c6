//! Finder argument types

use crate::config::PaginateConfig;
use crate::error::Result;
use crate::params::find_param;
use crate::types::{parse_per_page, JsonValue, PageNumber, ParamMap};
use serde::Deserialize;

/// Arguments to a `paginate` call
///
/// `page` and `per_page` are kept as raw JSON values so request parameters
/// (usually strings) can be forwarded unchanged; they are validated when the
/// finder resolves them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaginateArgs {
    /// Requested page (integer or numeric string)
    pub page: Option<JsonValue>,

    /// Requested page size (integer or numeric string)
    pub per_page: Option<JsonValue>,

    /// Known total, skips counting
    pub total_entries: Option<u64>,
}

impl PaginateArgs {
    /// Empty arguments: every value falls back to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested page
    #[must_use]
    pub fn page(mut self, page: impl Into<JsonValue>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set the requested page size
    #[must_use]
    pub fn per_page(mut self, per_page: impl Into<JsonValue>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    /// Set a known total
    #[must_use]
    pub fn total_entries(mut self, total: u64) -> Self {
        self.total_entries = Some(total);
        self
    }

    /// Read `page` (under `param_name`, which may be bracketed) and `per_page`
    /// from request parameters
    ///
    /// Blank values count as absent.
    pub fn from_params(params: &ParamMap, param_name: &str) -> Self {
        let present = |value: Option<&JsonValue>| {
            value
                .filter(|v| !matches!(v, JsonValue::Null))
                .filter(|v| v.as_str().map_or(true, |s| !s.trim().is_empty()))
                .cloned()
        };
        Self {
            page: present(find_param(params, param_name)),
            per_page: present(params.get("per_page")),
            total_entries: None,
        }
    }

    /// The requested page, else `fallback`, else page 1
    pub fn resolve_page(&self, fallback: Option<PageNumber>) -> Result<PageNumber> {
        match &self.page {
            Some(value) => PageNumber::from_value(value),
            None => Ok(fallback.unwrap_or_default()),
        }
    }

    /// The requested page size, else `fallback`, else the configured default
    pub fn resolve_per_page(&self, fallback: Option<u64>, config: &PaginateConfig) -> Result<u64> {
        match &self.per_page {
            Some(value) => parse_per_page(value),
            None => Ok(fallback.filter(|n| *n > 0).unwrap_or(config.per_page)),
        }
    }
}
