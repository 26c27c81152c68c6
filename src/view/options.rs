//! Render options for the link renderer

use crate::types::ParamMap;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Option keys that control pagination rather than describe the container element
pub const PAGINATION_OPTION_KEYS: &[&str] = &[
    "class",
    "previous_label",
    "next_label",
    "inner_window",
    "outer_window",
    "separator",
    "param_name",
    "params",
    "renderer",
    "page_links",
    "container",
];

/// How the container element's `id` is chosen
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "IdSetting")]
pub enum ContainerId {
    /// No id attribute
    #[default]
    None,
    /// Derived from the item type: `Post` → `posts_pagination`
    ///
    /// Ignored when the links are rendered without a container.
    Auto,
    /// A fixed id
    Explicit(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdSetting {
    Flag(bool),
    Name(String),
}

impl From<IdSetting> for ContainerId {
    fn from(setting: IdSetting) -> Self {
        match setting {
            IdSetting::Flag(true) => ContainerId::Auto,
            IdSetting::Flag(false) => ContainerId::None,
            IdSetting::Name(name) => ContainerId::Explicit(name),
        }
    }
}

/// Options controlling how pagination links are rendered
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// CSS class of the container element
    pub class: Option<String>,
    /// Label of the "previous page" control (inserted unescaped)
    pub previous_label: String,
    /// Label of the "next page" control (inserted unescaped)
    pub next_label: String,
    /// Pages shown on each side of the current page
    pub inner_window: u32,
    /// Pages shown at each end of the page range
    pub outer_window: u32,
    /// String placed between rendered items
    pub separator: String,
    /// Name of the page parameter; may be nested like `list[page]`
    pub param_name: String,
    /// Extra parameters merged into every link
    pub params: Option<ParamMap>,
    /// Render page number links (otherwise only previous/next)
    pub page_links: bool,
    /// Wrap the links in a `<div>`
    pub container: bool,
    /// Container id
    pub id: ContainerId,
    /// Extra HTML attributes for the container
    pub attributes: BTreeMap<String, String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class: Some("pagination".to_string()),
            previous_label: "&#8592; Previous".to_string(),
            next_label: "Next &#8594;".to_string(),
            inner_window: 4,
            outer_window: 1,
            separator: " ".to_string(),
            param_name: "page".to_string(),
            params: None,
            page_links: true,
            container: true,
            id: ContainerId::None,
            attributes: BTreeMap::new(),
        }
    }
}

impl RenderOptions {
    /// Create options with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page parameter name
    #[must_use]
    pub fn param_name(mut self, name: impl Into<String>) -> Self {
        self.param_name = name.into();
        self
    }

    /// Set the separator
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the previous/next labels
    #[must_use]
    pub fn labels(mut self, previous: impl Into<String>, next: impl Into<String>) -> Self {
        self.previous_label = previous.into();
        self.next_label = next.into();
        self
    }

    /// Set the inner and outer window sizes
    #[must_use]
    pub fn window(mut self, inner: u32, outer: u32) -> Self {
        self.inner_window = inner;
        self.outer_window = outer;
        self
    }

    /// Set extra link parameters
    #[must_use]
    pub fn params(mut self, params: ParamMap) -> Self {
        self.params = Some(params);
        self
    }

    /// Enable or disable the container element
    #[must_use]
    pub fn container(mut self, container: bool) -> Self {
        self.container = container;
        self
    }

    /// Set the container id
    ///
    /// [`ContainerId::Auto`] only takes effect with `container` enabled; a
    /// generated id is never emitted without a container element.
    #[must_use]
    pub fn id(mut self, id: ContainerId) -> Self {
        self.id = id;
        self
    }

    /// Set the container class (`None` drops the attribute)
    #[must_use]
    pub fn class(mut self, class: Option<String>) -> Self {
        self.class = class;
        self
    }

    /// Enable or disable page number links
    #[must_use]
    pub fn page_links(mut self, page_links: bool) -> Self {
        self.page_links = page_links;
        self
    }

    /// Add an extra container attribute
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.class.as_deref(), Some("pagination"));
        assert_eq!(options.separator, " ");
        assert_eq!(options.param_name, "page");
        assert_eq!((options.inner_window, options.outer_window), (4, 1));
        assert!(options.container);
        assert!(options.page_links);
        assert_eq!(options.id, ContainerId::None);
    }

    #[test]
    fn test_deserialize_id_settings() {
        let options: RenderOptions = serde_yaml::from_str("id: true").unwrap();
        assert_eq!(options.id, ContainerId::Auto);

        let options: RenderOptions = serde_yaml::from_str("id: false").unwrap();
        assert_eq!(options.id, ContainerId::None);

        let options: RenderOptions = serde_yaml::from_str("id: post_pages").unwrap();
        assert_eq!(options.id, ContainerId::Explicit("post_pages".to_string()));
    }

    #[test]
    fn test_deserialize_partial_keeps_defaults() {
        let yaml = r"
separator: ' | '
param_name: list[page]
attributes:
  role: navigation
";
        let options: RenderOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(options.separator, " | ");
        assert_eq!(options.param_name, "list[page]");
        assert_eq!(options.attributes.get("role").map(String::as_str), Some("navigation"));
        assert_eq!(options.next_label, "Next &#8594;");
    }
}
