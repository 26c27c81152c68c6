//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{self, ServerConfig};
use crate::collection::{Collection, Paginated};
use crate::config::PaginateConfig;
use crate::error::{Error, Result};
use crate::finders::PaginateArgs;
use crate::types::{JsonValue, PageNumber};
use crate::view::{
    page_entries_info, pagination_items, will_paginate, ContainerId, InnerOuterWindow,
    LinkRenderer, PaginationItem, RenderContext, RequestContext,
};
use axum::http::Method;
use serde::Serialize;
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Render {
                url,
                method,
                page,
                per_page,
                total,
                item_type,
                param_name,
                separator,
                no_container,
                auto_id,
                no_page_links,
            } => {
                let request = RenderRequest {
                    url,
                    method,
                    page: page.as_deref(),
                    per_page: per_page.as_deref(),
                    total: *total,
                    item_type,
                    param_name: param_name.as_deref(),
                    separator: separator.as_deref(),
                    container: !*no_container,
                    auto_id: *auto_id,
                    page_links: !*no_page_links,
                };
                self.render(&request)
            }
            Commands::Window {
                page,
                total_pages,
                inner,
                outer,
            } => self.window(*page, *total_pages, *inner, *outer),
            Commands::Info {
                page,
                per_page,
                total,
                item_type,
                entry_name,
            } => self.info(
                page,
                per_page.as_deref(),
                *total,
                item_type,
                entry_name.as_deref(),
            ),
            Commands::Serve {
                port,
                database,
                table,
                records,
            } => {
                let config = ServerConfig {
                    port: *port,
                    database: database.clone(),
                    table: table.clone(),
                    records: *records,
                };
                server::serve(config, self.load_config()?).await
            }
        }
    }

    /// Load the pagination config file (if any) and apply env overrides
    fn load_config(&self) -> Result<PaginateConfig> {
        let config = match &self.cli.config {
            Some(path) => PaginateConfig::load(path)?,
            None => PaginateConfig::default(),
        };
        config.with_env_overrides()
    }

    /// Render links for a request
    fn render(&self, request: &RenderRequest<'_>) -> Result<()> {
        let config = self.load_config()?;
        let method = Method::from_bytes(request.method.to_uppercase().as_bytes())
            .map_err(|e| Error::invalid_argument("method", e.to_string()))?;
        let context = RequestContext::parse(method, request.url)?;

        let mut options = config.view.clone();
        if let Some(name) = request.param_name {
            options = options.param_name(name);
        }
        if let Some(separator) = request.separator {
            options = options.separator(separator);
        }
        options = options
            .container(request.container)
            .page_links(request.page_links);
        if request.auto_id {
            options = options.id(ContainerId::Auto);
        }

        let mut args = PaginateArgs::from_params(context.params(), &options.param_name);
        if let Some(page) = request.page {
            args = args.page(page);
        }
        if let Some(per_page) = request.per_page {
            args = args.per_page(per_page);
        }
        let collection = placeholder_page(&args, &config, request.total, request.item_type)?;

        match self.cli.format {
            OutputFormat::Html => {
                if let Some(html) = will_paginate(&collection, &options, &context)? {
                    println!("{html}");
                }
            }
            OutputFormat::Json | OutputFormat::Pretty => {
                let renderer = LinkRenderer::prepare(&collection, options, &context);
                let pagination = serde_json::to_value(&collection)?;
                self.output_message(&json!({
                    "pagination": pagination["pagination"],
                    "links": renderer.links()?,
                }));
            }
        }
        Ok(())
    }

    /// Print the page window
    fn window(&self, page: u64, total_pages: u64, inner: u32, outer: u32) -> Result<()> {
        let current = PageNumber::new(page)?;
        let window = InnerOuterWindow::new(inner, outer);
        let items = pagination_items(&window, current, total_pages.max(1), true);

        match self.cli.format {
            OutputFormat::Html => println!("{}", describe_window(&items, current)),
            OutputFormat::Json | OutputFormat::Pretty => self.output_message(&items),
        }
        Ok(())
    }

    /// Print the entries info message
    fn info(
        &self,
        page: &str,
        per_page: Option<&str>,
        total: u64,
        item_type: &str,
        entry_name: Option<&str>,
    ) -> Result<()> {
        let config = self.load_config()?;
        let mut args = PaginateArgs::new().page(page);
        if let Some(per_page) = per_page {
            args = args.per_page(per_page);
        }
        let collection = placeholder_page(&args, &config, total, item_type)?;
        let message = page_entries_info(&collection, entry_name, &config.entries_info)?;

        match self.cli.format {
            OutputFormat::Html => println!("{message}"),
            OutputFormat::Json | OutputFormat::Pretty => {
                self.output_message(&json!({ "message": message }));
            }
        }
        Ok(())
    }

    /// Output a JSON message
    fn output_message<T: Serialize>(&self, msg: &T) {
        match self.cli.format {
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
            OutputFormat::Json | OutputFormat::Html => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
        }
    }
}

/// Arguments of the `render` command
struct RenderRequest<'a> {
    url: &'a str,
    method: &'a str,
    page: Option<&'a str>,
    per_page: Option<&'a str>,
    total: u64,
    item_type: &'a str,
    param_name: Option<&'a str>,
    separator: Option<&'a str>,
    container: bool,
    auto_id: bool,
    page_links: bool,
}

/// Largest page `render` and `info` will fill with placeholders
const MAX_PLACEHOLDER_ITEMS: u64 = 10_000;

/// A page of `total` items without content, filled with as many
/// placeholders as the page would show
fn placeholder_page(
    args: &PaginateArgs,
    config: &PaginateConfig,
    total: u64,
    item_type: &str,
) -> Result<Collection<JsonValue>> {
    let page = args.resolve_page(None)?;
    let per_page = args.resolve_per_page(None, config)?;
    let collection =
        Collection::with_page(page, per_page, Some(total))?.with_item_type(item_type.to_string());
    let shown = total.saturating_sub(collection.offset()).min(per_page);
    if shown > MAX_PLACEHOLDER_ITEMS {
        return Err(Error::invalid_argument(
            "per_page",
            format!("cannot show {shown} entries on one page (at most {MAX_PLACEHOLDER_ITEMS})"),
        ));
    }
    let shown = usize::try_from(shown).unwrap_or(usize::MAX);
    Ok(collection.replace(vec![JsonValue::Null; shown]))
}

/// `« 1 2 [3] 4 5 … 20 »`
fn describe_window(items: &[PaginationItem], current: PageNumber) -> String {
    items
        .iter()
        .map(|item| match item {
            PaginationItem::PreviousPage => "«".to_string(),
            PaginationItem::NextPage => "»".to_string(),
            PaginationItem::Gap => "…".to_string(),
            PaginationItem::Page(page) if *page == current => format!("[{page}]"),
            PaginationItem::Page(page) => page.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_describe_window() {
        let current = PageNumber::new(3).unwrap();
        let items = pagination_items(&InnerOuterWindow::new(1, 1), current, 10, true);
        assert_eq!(describe_window(&items, current), "« 1 2 [3] 4 … 9 10 »");
    }

    #[test]
    fn test_placeholder_page() {
        let config = PaginateConfig::default();
        let args = PaginateArgs::new().page(3).per_page(10);
        let page = placeholder_page(&args, &config, 23, "Post").unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page.total_entries(), 23);
        assert_eq!(page.item_type_name(), "Post");

        let beyond = placeholder_page(&args.page(9), &config, 23, "Post").unwrap();
        assert!(beyond.is_empty());
    }

    #[test]
    fn test_placeholder_page_rejects_oversized_pages() {
        let config = PaginateConfig::default();
        let huge = 1_000_000_000_000u64;
        let args = PaginateArgs::new().per_page(huge);
        let err = placeholder_page(&args, &config, huge, "Post").unwrap_err();
        assert!(err.is_invalid_argument());

        // a huge per_page is fine when few entries are left to show
        let page = placeholder_page(&args, &config, 12, "Post").unwrap();
        assert_eq!(page.len(), 12);
    }
}
