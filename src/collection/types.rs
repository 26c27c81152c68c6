//! The owned page collection

use super::paginated::{short_type_name, Paginated};
use crate::error::{Error, Result};
use crate::types::PageNumber;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::ops::Deref;

/// One page of items plus the metadata needed to paginate it
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    current_page: PageNumber,
    per_page: u64,
    total_entries: Option<u64>,
    item_type: Cow<'static, str>,
}

impl<T> Collection<T> {
    /// Create an empty collection for `current_page`
    ///
    /// Fails with `InvalidArgument` if `current_page < 1` or `per_page == 0`.
    pub fn new(current_page: u64, per_page: u64, total_entries: Option<u64>) -> Result<Self> {
        let current_page = PageNumber::new(current_page)?;
        Self::with_page(current_page, per_page, total_entries)
    }

    /// Create an empty collection from an already validated page number
    pub fn with_page(
        current_page: PageNumber,
        per_page: u64,
        total_entries: Option<u64>,
    ) -> Result<Self> {
        if per_page == 0 {
            return Err(Error::invalid_argument(
                "per_page",
                "per_page must be a positive integer, got 0",
            ));
        }
        Ok(Self {
            items: Vec::new(),
            current_page,
            per_page,
            total_entries,
            item_type: Cow::Borrowed(short_type_name::<T>()),
        })
    }

    /// Override the item type name (defaults to the Rust type name of `T`)
    #[must_use]
    pub fn with_item_type(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.item_type = name.into();
        self
    }

    /// Install the items of the current page
    ///
    /// When the total is unknown and the page came back short, the total is
    /// inferred: this must be the last page.
    #[must_use]
    pub fn replace(mut self, items: Vec<T>) -> Self {
        let len = items.len() as u64;
        if self.total_entries.is_none()
            && len < self.per_page
            && (self.current_page == 1u64 || len > 0)
        {
            self.total_entries = Some(self.offset() + len);
        }
        self.items = items;
        self
    }

    /// Set the total number of entries
    pub fn set_total_entries(&mut self, total: u64) {
        self.total_entries = Some(total);
    }

    /// The total number of entries, if known
    pub fn known_total_entries(&self) -> Option<u64> {
        self.total_entries
    }

    /// Items of the current page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the collection and return its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Map the items, keeping the page metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Collection<U> {
        Collection {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            per_page: self.per_page,
            total_entries: self.total_entries,
            item_type: self.item_type,
        }
    }
}

impl<T> Paginated for Collection<T> {
    fn current_page(&self) -> PageNumber {
        self.current_page
    }

    fn per_page(&self) -> u64 {
        self.per_page
    }

    fn total_entries(&self) -> u64 {
        self.total_entries.unwrap_or(0)
    }

    fn item_type_name(&self) -> &str {
        &self.item_type
    }
}

impl<T> Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Serialized as `{ "items": [...], "pagination": { ... } }`
impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Meta {
            current_page: PageNumber,
            per_page: u64,
            total_entries: u64,
            total_pages: u64,
            offset: u64,
            previous_page: Option<PageNumber>,
            next_page: Option<PageNumber>,
        }

        #[derive(Serialize)]
        struct Page<'a, T> {
            items: &'a [T],
            pagination: Meta,
        }

        Page {
            items: &self.items,
            pagination: Meta {
                current_page: self.current_page,
                per_page: self.per_page,
                total_entries: Paginated::total_entries(self),
                total_pages: self.total_pages(),
                offset: self.offset(),
                previous_page: self.previous_page(),
                next_page: self.next_page(),
            },
        }
        .serialize(serializer)
    }
}
