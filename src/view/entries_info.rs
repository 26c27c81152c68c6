//! "Displaying posts 6 - 10 of 23 in total" summaries

use super::inflect::{pluralize, underscore};
use crate::collection::{Collection, Paginated};
use crate::error::Result;
use crate::template::{self, TemplateContext};
use serde::Deserialize;

/// Variables available to entries info templates
pub const ENTRIES_INFO_VARIABLES: &[&str] = &["name", "plural", "count", "from", "to", "total"];

/// Message templates for [`page_entries_info`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntriesInfoTemplates {
    /// Single page, no entries
    pub none: String,
    /// Single page, one entry
    pub one: String,
    /// Single page, several entries
    pub all: String,
    /// Several pages
    pub range: String,
}

impl Default for EntriesInfoTemplates {
    fn default() -> Self {
        Self {
            none: "No {{ plural }} found".to_string(),
            one: "Displaying <b>1</b> {{ name }}".to_string(),
            all: "Displaying <b>all {{ count }}</b> {{ plural }}".to_string(),
            range: "Displaying {{ plural }} <b>{{ from }}&nbsp;-&nbsp;{{ to }}</b> of <b>{{ total }}</b> in total"
                .to_string(),
        }
    }
}

impl EntriesInfoTemplates {
    /// Check that every template only uses known variables
    pub fn validate(&self) -> Result<()> {
        for message in [&self.none, &self.one, &self.all, &self.range] {
            template::validate(message, ENTRIES_INFO_VARIABLES)?;
        }
        Ok(())
    }
}

/// Summarize which entries the current page shows
///
/// `entry_name` defaults to the item type (`BlogPost` → `blog post`), or
/// `entry` for an empty page.
pub fn page_entries_info<T>(
    collection: &Collection<T>,
    entry_name: Option<&str>,
    templates: &EntriesInfoTemplates,
) -> Result<String> {
    let name = match entry_name {
        Some(name) => name.to_string(),
        None if collection.is_empty() => "entry".to_string(),
        None => underscore(collection.item_type_name()).replacen('_', " ", 1),
    };

    let count = collection.len() as u64;
    let offset = collection.offset();

    let mut ctx = TemplateContext::new();
    ctx.set("plural", pluralize(&name))
        .set("name", name)
        .set("count", count)
        .set("from", offset.saturating_add(1))
        .set("to", offset.saturating_add(count))
        .set("total", Paginated::total_entries(collection));

    let message = if collection.total_pages() < 2 {
        match count {
            0 => &templates.none,
            1 => &templates.one,
            _ => &templates.all,
        }
    } else {
        &templates.range
    };
    template::render(message, &ctx)
}
