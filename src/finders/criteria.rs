//! Document-store criteria with pagination
//!
//! A [`Criteria`] is a lazy, chainable query against a [`DocumentSource`].
//! Calling `paginate` or `page` turns it into a [`PaginatedCriteria`], which
//! sets `skip`/`limit` from the page and knows how to count its total.

use super::types::PaginateArgs;
use crate::collection::{Collection, Paginated};
use crate::config::PaginateConfig;
use crate::error::Result;
use crate::types::{JsonValue, PageNumber, ParamMap};
use serde::Serialize;
use std::cell::OnceCell;
use std::cmp::Ordering;

/// A stored document
pub type Document = JsonValue;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Options accompanying a selector
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryOptions {
    /// Documents to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,

    /// Maximum number of documents to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Sort keys, applied in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<(String, SortOrder)>,
}

/// Selector plus options, as handed to a [`DocumentSource`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Field equality conditions
    pub selector: ParamMap,

    /// Skip, limit and sort
    pub options: QueryOptions,
}

/// A store that can run criteria queries
pub trait DocumentSource {
    /// Model name used for ids and messages (e.g. `"Post"`)
    fn model_name(&self) -> &str;

    /// Documents matching `query.selector`, sorted, skipped and limited
    fn find(&self, query: &Query) -> Result<Vec<Document>>;

    /// Number of documents matching `selector`, ignoring skip and limit
    fn count(&self, selector: &ParamMap) -> Result<u64>;
}

// ============================================================================
// Criteria
// ============================================================================

/// A chainable query
#[derive(Debug, Clone)]
pub struct Criteria<'s, S: DocumentSource + ?Sized> {
    source: &'s S,
    query: Query,
}

impl<'s, S: DocumentSource + ?Sized> Criteria<'s, S> {
    /// Match every document of `source`
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            query: Query::default(),
        }
    }

    /// Require `field == value`
    #[must_use]
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.query.selector.insert(field.into(), value.into());
        self
    }

    /// Add a sort key
    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.query.options.sort.push((field.into(), order));
        self
    }

    #[must_use]
    pub fn skip(mut self, skip: u64) -> Self {
        self.query.options.skip = Some(skip);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.query.options.limit = Some(limit);
        self
    }

    /// The skip option, `None` unless set
    pub fn offset(&self) -> Option<u64> {
        self.query.options.skip
    }

    pub fn options(&self) -> &QueryOptions {
        &self.query.options
    }

    pub fn selector(&self) -> &ParamMap {
        &self.query.selector
    }

    /// Run the query
    pub fn to_vec(&self) -> Result<Vec<Document>> {
        self.source.find(&self.query)
    }

    /// Count matching documents, ignoring skip and limit
    pub fn count(&self) -> Result<u64> {
        self.source.count(&self.query.selector)
    }

    /// Paginate this criteria
    ///
    /// `per_page` falls back to a limit set earlier in the chain, then to the
    /// configured default.
    pub fn paginate(
        self,
        args: &PaginateArgs,
        config: &PaginateConfig,
    ) -> Result<PaginatedCriteria<'s, S>> {
        let page = args.resolve_page(None)?;
        let per_page = args.resolve_per_page(self.query.options.limit, config)?;
        Ok(PaginatedCriteria::build(
            self,
            page,
            per_page,
            args.total_entries,
            OnceCell::new(),
        ))
    }

    /// Paginate with only a page number
    pub fn page(
        self,
        page: impl Into<JsonValue>,
        config: &PaginateConfig,
    ) -> Result<PaginatedCriteria<'s, S>> {
        self.paginate(&PaginateArgs::new().page(page), config)
    }
}

// ============================================================================
// Paginated Criteria
// ============================================================================

/// A criteria limited to one page
#[derive(Debug)]
pub struct PaginatedCriteria<'s, S: DocumentSource + ?Sized> {
    criteria: Criteria<'s, S>,
    current_page: PageNumber,
    total_entries: OnceCell<u64>,
}

impl<'s, S: DocumentSource + ?Sized> PaginatedCriteria<'s, S> {
    fn build(
        mut criteria: Criteria<'s, S>,
        page: PageNumber,
        per_page: u64,
        given_total: Option<u64>,
        counted: OnceCell<u64>,
    ) -> Self {
        criteria.query.options.limit = Some(per_page);
        criteria.query.options.skip = Some((page.get() - 1).saturating_mul(per_page));
        let total_entries = match given_total {
            Some(total) => OnceCell::from(total),
            None => counted,
        };
        Self {
            criteria,
            current_page: page,
            total_entries,
        }
    }

    /// Re-paginate; page and per_page set earlier in the chain are kept
    /// unless `args` overrides them
    pub fn paginate(self, args: &PaginateArgs, config: &PaginateConfig) -> Result<Self> {
        let page = args.resolve_page(Some(self.current_page))?;
        let per_page = args.resolve_per_page(self.criteria.query.options.limit, config)?;
        Ok(Self::build(
            self.criteria,
            page,
            per_page,
            args.total_entries,
            self.total_entries,
        ))
    }

    /// Move to another page, keeping per_page
    pub fn page(self, page: impl Into<JsonValue>, config: &PaginateConfig) -> Result<Self> {
        self.paginate(&PaginateArgs::new().page(page), config)
    }

    pub fn options(&self) -> &QueryOptions {
        self.criteria.options()
    }

    /// The underlying criteria, with skip and limit applied
    pub fn criteria(&self) -> &Criteria<'s, S> {
        &self.criteria
    }

    /// Run the page query
    pub fn to_vec(&self) -> Result<Vec<Document>> {
        self.criteria.to_vec()
    }

    /// Count matching documents once and cache the result
    pub fn try_total_entries(&self) -> Result<u64> {
        if let Some(total) = self.total_entries.get() {
            return Ok(*total);
        }
        let total = self.criteria.count()?;
        tracing::debug!(
            model = self.criteria.source.model_name(),
            total,
            "Counted criteria total"
        );
        Ok(*self.total_entries.get_or_init(|| total))
    }

    /// Execute the page query and collect it with its metadata
    pub fn to_collection(&self) -> Result<Collection<Document>> {
        let total = self.try_total_entries()?;
        let collection = Collection::with_page(self.current_page, self.per_page(), Some(total))?
            .with_item_type(self.criteria.source.model_name().to_string());
        Ok(collection.replace(self.to_vec()?))
    }
}

impl<S: DocumentSource + ?Sized> Paginated for PaginatedCriteria<'_, S> {
    fn current_page(&self) -> PageNumber {
        self.current_page
    }

    fn per_page(&self) -> u64 {
        self.criteria.query.options.limit.unwrap_or(1)
    }

    /// Falls back to 0 when counting fails; use `try_total_entries` to see the error
    fn total_entries(&self) -> u64 {
        match self.try_total_entries() {
            Ok(total) => total,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to count criteria total");
                0
            }
        }
    }

    fn item_type_name(&self) -> &str {
        self.criteria.source.model_name()
    }
}

// ============================================================================
// Memory Store
// ============================================================================

/// An in-memory [`DocumentSource`] over JSON objects
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    model_name: String,
    documents: Vec<Document>,
}

impl MemoryStore {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            documents: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_documents(mut self, documents: impl IntoIterator<Item = Document>) -> Self {
        self.documents.extend(documents);
        self
    }

    pub fn insert(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Start a criteria over this store
    pub fn criteria(&self) -> Criteria<'_, Self> {
        Criteria::new(self)
    }

    fn matching<'a>(&'a self, selector: &'a ParamMap) -> impl Iterator<Item = &'a Document> {
        self.documents.iter().filter(move |doc| {
            selector
                .iter()
                .all(|(field, expected)| doc.get(field) == Some(expected))
        })
    }
}

impl DocumentSource for MemoryStore {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn find(&self, query: &Query) -> Result<Vec<Document>> {
        let mut found: Vec<&Document> = self.matching(&query.selector).collect();

        if !query.options.sort.is_empty() {
            found.sort_by(|a, b| {
                query
                    .options
                    .sort
                    .iter()
                    .map(|(field, order)| {
                        let ordering = compare_values(a.get(field), b.get(field));
                        match order {
                            SortOrder::Asc => ordering,
                            SortOrder::Desc => ordering.reverse(),
                        }
                    })
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            });
        }

        let skip = usize::try_from(query.options.skip.unwrap_or(0)).unwrap_or(usize::MAX);
        let limit = query
            .options
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        Ok(found.into_iter().skip(skip).take(limit).cloned().collect())
    }

    fn count(&self, selector: &ParamMap) -> Result<u64> {
        Ok(self.matching(selector).count() as u64)
    }
}

/// Missing < null < bool < number < string < anything else
fn compare_values(a: Option<&JsonValue>, b: Option<&JsonValue>) -> Ordering {
    fn rank(value: Option<&JsonValue>) -> u8 {
        match value {
            None => 0,
            Some(JsonValue::Null) => 1,
            Some(JsonValue::Bool(_)) => 2,
            Some(JsonValue::Number(_)) => 3,
            Some(JsonValue::String(_)) => 4,
            Some(_) => 5,
        }
    }

    match (a, b) {
        (Some(JsonValue::Bool(x)), Some(JsonValue::Bool(y))) => x.cmp(y),
        (Some(JsonValue::Number(x)), Some(JsonValue::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(JsonValue::String(x)), Some(JsonValue::String(y))) => x.cmp(y),
        _ => rank(a)
            .cmp(&rank(b))
            .then_with(|| a.map(ToString::to_string).cmp(&b.map(ToString::to_string))),
    }
}
