//! The link renderer
//!
//! Turns a paginated source into previous/next controls and page links,
//! either as typed [`PageLink`]s or as an HTML fragment.

use super::context::RenderContext;
use super::html::tag;
use super::inflect::{pluralize, underscore};
use super::options::{ContainerId, RenderOptions, PAGINATION_OPTION_KEYS};
use super::window::{pagination_items, InnerOuterWindow, PaginationItem, WindowAlgorithm};
use crate::collection::Paginated;
use crate::error::Result;
use crate::params::{is_simple_param_name, nest_param, stringified_merge};
use crate::types::{PageNumber, ParamMap};
use serde::Serialize;
use std::cell::OnceCell;

const GAP_HTML: &str = r#"<span class="gap">&hellip;</span>"#;

/// A previous/next control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlLink {
    /// Display label
    pub label: String,
    /// Target page, `None` at the boundary
    pub page: Option<PageNumber>,
    /// Target URL, `None` at the boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Link relation of the target page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<&'static str>,
}

impl ControlLink {
    /// Whether the control has nowhere to go
    pub fn is_disabled(&self) -> bool {
        self.href.is_none()
    }
}

/// A rendered-but-not-yet-serialized pagination entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    /// The current page (not a link)
    Current {
        /// Page number
        page: PageNumber,
    },
    /// A link to another page
    Page {
        /// Page number
        page: PageNumber,
        /// Target URL
        href: String,
        /// Link relation (`prev`, `next`, `start`, `prev start`)
        #[serde(skip_serializing_if = "Option::is_none")]
        rel: Option<&'static str>,
    },
    /// Skipped pages
    Gap,
    /// The "previous page" control
    PreviousPage(ControlLink),
    /// The "next page" control
    NextPage(ControlLink),
}

/// Builds pagination links for one paginated source within one request
pub struct LinkRenderer<'a> {
    collection: &'a dyn Paginated,
    options: RenderOptions,
    context: &'a dyn RenderContext,
    window: Box<dyn WindowAlgorithm + 'a>,
    container_attributes: OnceCell<Vec<(String, String)>>,
    base_url_params: OnceCell<ParamMap>,
}

impl<'a> LinkRenderer<'a> {
    /// Prepare a renderer for `collection` in the given request `context`
    pub fn prepare(
        collection: &'a dyn Paginated,
        options: RenderOptions,
        context: &'a dyn RenderContext,
    ) -> Self {
        let window = InnerOuterWindow::new(options.inner_window, options.outer_window);
        Self {
            collection,
            options,
            context,
            window: Box::new(window),
            container_attributes: OnceCell::new(),
            base_url_params: OnceCell::new(),
        }
    }

    /// Replace the page window algorithm
    #[must_use]
    pub fn with_window(mut self, window: impl WindowAlgorithm + 'a) -> Self {
        self.window = Box::new(window);
        self
    }

    /// The options this renderer was prepared with
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The item sequence to render: controls, page numbers and gaps
    pub fn pagination(&self) -> Vec<PaginationItem> {
        pagination_items(
            &*self.window,
            self.collection.current_page(),
            self.collection.total_pages(),
            self.options.page_links,
        )
    }

    /// Resolve every pagination item into a typed link
    pub fn links(&self) -> Result<Vec<PageLink>> {
        self.pagination()
            .into_iter()
            .map(|item| self.link_for(item))
            .collect()
    }

    /// Render the complete HTML fragment
    pub fn to_html(&self) -> Result<String> {
        let links = self.links()?;
        tracing::debug!(
            current_page = %self.collection.current_page(),
            total_pages = self.collection.total_pages(),
            items = links.len(),
            "Rendering pagination links"
        );

        let html = links
            .iter()
            .map(render_link)
            .collect::<Vec<_>>()
            .join(&self.options.separator);

        Ok(if self.options.container {
            self.html_container(&html)
        } else {
            html
        })
    }

    /// HTML attributes of the container element
    ///
    /// `class`, `id` and the extra attributes, minus pagination-control keys.
    pub fn container_attributes(&self) -> &[(String, String)] {
        self.container_attributes.get_or_init(|| {
            let mut attributes = Vec::new();
            if let Some(class) = &self.options.class {
                attributes.push(("class".to_string(), class.clone()));
            }
            match &self.options.id {
                ContainerId::Auto if self.options.container => {
                    let id = container_id_for(self.collection.item_type_name());
                    attributes.push(("id".to_string(), id));
                }
                ContainerId::Explicit(id) => attributes.push(("id".to_string(), id.clone())),
                _ => {}
            }
            for (name, value) in &self.options.attributes {
                if name == "id" || PAGINATION_OPTION_KEYS.contains(&name.as_str()) {
                    continue;
                }
                attributes.push((name.clone(), value.clone()));
            }
            attributes
        })
    }

    /// URL of `page`, keeping the current GET parameters and the `params` option
    ///
    /// The URL is raw; [`tag`] escapes it when it lands in an attribute.
    pub fn url(&self, page: PageNumber) -> Result<String> {
        let mut url_params = self.base_url_params().clone();
        add_current_page_param(&mut url_params, &self.options.param_name, page);
        self.context.url_for(&url_params, false)
    }

    fn base_url_params(&self) -> &ParamMap {
        self.base_url_params.get_or_init(|| {
            let mut url_params = self.default_url_params();
            if let Some(params) = &self.options.params {
                stringified_merge(&mut url_params, params);
            }
            url_params
        })
    }

    fn default_url_params(&self) -> ParamMap {
        let mut url_params = ParamMap::new();
        if self.context.is_get_request() {
            // page links preserve filters and sorting of the current request
            stringified_merge(&mut url_params, self.context.params());
        }
        url_params
    }

    fn link_for(&self, item: PaginationItem) -> Result<PageLink> {
        Ok(match item {
            PaginationItem::Page(page) if page == self.collection.current_page() => {
                PageLink::Current { page }
            }
            PaginationItem::Page(page) => PageLink::Page {
                page,
                href: self.url(page)?,
                rel: self.rel_value(page),
            },
            PaginationItem::Gap => PageLink::Gap,
            PaginationItem::PreviousPage => PageLink::PreviousPage(self.control(
                self.collection.previous_page(),
                &self.options.previous_label,
            )?),
            PaginationItem::NextPage => PageLink::NextPage(
                self.control(self.collection.next_page(), &self.options.next_label)?,
            ),
        })
    }

    fn control(&self, page: Option<PageNumber>, label: &str) -> Result<ControlLink> {
        let href = page.map(|page| self.url(page)).transpose()?;
        Ok(ControlLink {
            label: label.to_string(),
            page,
            href,
            rel: page.and_then(|page| self.rel_value(page)),
        })
    }

    fn rel_value(&self, page: PageNumber) -> Option<&'static str> {
        if Some(page) == self.collection.previous_page() {
            Some(if page == 1u64 { "prev start" } else { "prev" })
        } else if Some(page) == self.collection.next_page() {
            Some("next")
        } else if page == 1u64 {
            Some("start")
        } else {
            None
        }
    }

    fn html_container(&self, html: &str) -> String {
        let attributes: Vec<(&str, Option<&str>)> = self
            .container_attributes()
            .iter()
            .map(|(name, value)| (name.as_str(), Some(value.as_str())))
            .collect();
        tag("div", html, &attributes)
    }
}

/// Set the page parameter, expanding bracketed names into nested maps
fn add_current_page_param(url_params: &mut ParamMap, param_name: &str, page: PageNumber) {
    if is_simple_param_name(param_name) {
        url_params.insert(param_name.to_string(), page.into());
    } else {
        stringified_merge(url_params, &nest_param(param_name, page));
    }
}

/// Generated container id: `Post` → `posts_pagination`
pub fn container_id_for(item_type_name: &str) -> String {
    format!("{}_pagination", pluralize(&underscore(item_type_name)))
}

fn render_link(link: &PageLink) -> String {
    match link {
        PageLink::Current { page } => tag("em", page, &[]),
        PageLink::Page { page, href, rel } => {
            tag("a", page, &[("rel", *rel), ("href", Some(href.as_str()))])
        }
        PageLink::Gap => GAP_HTML.to_string(),
        PageLink::PreviousPage(control) => render_control(control, "previous_page"),
        PageLink::NextPage(control) => render_control(control, "next_page"),
    }
}

fn render_control(control: &ControlLink, class_name: &str) -> String {
    match &control.href {
        Some(href) => tag(
            "a",
            &control.label,
            &[
                ("class", Some(class_name)),
                ("rel", control.rel),
                ("href", Some(href.as_str())),
            ],
        ),
        None => {
            let class = format!("{class_name} disabled");
            tag("span", &control.label, &[("class", Some(class.as_str()))])
        }
    }
}

/// Render pagination links, or `None` when everything fits on one page
pub fn will_paginate(
    collection: &dyn Paginated,
    options: &RenderOptions,
    context: &dyn RenderContext,
) -> Result<Option<String>> {
    if collection.total_pages() <= 1 {
        return Ok(None);
    }
    LinkRenderer::prepare(collection, options.clone(), context)
        .to_html()
        .map(Some)
}
