//! Application-level pagination configuration
//!
//! Loaded once at startup (usually from YAML) and passed to finders and
//! renderers afterwards.
//!
//! ```yaml
//! per_page: 20
//! view:
//!   separator: " | "
//!   previous_label: "&laquo; Newer"
//!   next_label: "Older &raquo;"
//!   id: true
//! entries_info:
//!   none: "Nothing here yet"
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::types::parse_per_page;
use crate::view::{EntriesInfoTemplates, RenderOptions};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable overriding `per_page`
pub const PER_PAGE_ENV: &str = "SOLIDAFY_PER_PAGE";

/// Default page size
pub const DEFAULT_PER_PAGE: u64 = 30;

/// Pagination configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaginateConfig {
    /// Default page size when a query does not specify one
    pub per_page: u64,

    /// Default render options for link rendering
    pub view: RenderOptions,

    /// Entries info message templates
    pub entries_info: EntriesInfoTemplates,
}

impl Default for PaginateConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            view: RenderOptions::default(),
            entries_info: EntriesInfoTemplates::default(),
        }
    }
}

impl PaginateConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            per_page = config.per_page,
            "Loaded pagination config"
        );
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: PaginateConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        match std::env::var(PER_PAGE_ENV) {
            Ok(value) => self.with_per_page_override(&value),
            Err(_) => Ok(self),
        }
    }

    /// Override `per_page` from a raw string value
    pub fn with_per_page_override(mut self, value: &str) -> Result<Self> {
        self.per_page = parse_per_page(&serde_json::Value::String(value.to_string()))
            .map_err(|e| Error::invalid_config_value(PER_PAGE_ENV, e.to_string()))?;
        tracing::debug!(per_page = self.per_page, "Applied per_page override");
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::invalid_config_value(
                "per_page",
                "must be a positive integer",
            ));
        }

        if self.view.param_name.trim().is_empty() {
            return Err(Error::invalid_config_value(
                "view.param_name",
                "cannot be empty",
            ));
        }

        self.entries_info.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ContainerId;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PaginateConfig::default();
        assert_eq!(config.per_page, 30);
        assert_eq!(config.view, RenderOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
per_page: 20
view:
  separator: " | "
  id: true
  container: true
entries_info:
  none: "Nothing here yet"
"#;
        let config = PaginateConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.per_page, 20);
        assert_eq!(config.view.separator, " | ");
        assert_eq!(config.view.id, ContainerId::Auto);
        assert_eq!(config.view.param_name, "page");
        assert_eq!(config.entries_info.none, "Nothing here yet");
        assert_eq!(
            config.entries_info.one,
            EntriesInfoTemplates::default().one
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = PaginateConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, PaginateConfig::default());
    }

    #[test]
    fn test_rejects_zero_per_page() {
        let err = PaginateConfig::from_yaml_str("per_page: 0").unwrap_err();
        assert!(err.to_string().contains("per_page"));
    }

    #[test]
    fn test_rejects_empty_param_name() {
        let err = PaginateConfig::from_yaml_str("view:\n  param_name: ''").unwrap_err();
        assert!(err.to_string().contains("param_name"));
    }

    #[test]
    fn test_rejects_unknown_template_variable() {
        let err =
            PaginateConfig::from_yaml_str("entries_info:\n  none: 'No {{ widgets }}'").unwrap_err();
        assert!(err.to_string().contains("widgets"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        assert!(PaginateConfig::from_yaml_str("per_page: [").is_err());
    }

    #[test]
    fn test_per_page_override() {
        let config = PaginateConfig::default().with_per_page_override("15").unwrap();
        assert_eq!(config.per_page, 15);

        let err = PaginateConfig::default()
            .with_per_page_override("zero")
            .unwrap_err();
        assert!(err.to_string().contains(PER_PAGE_ENV));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "per_page: 12").unwrap();

        let config = PaginateConfig::load(file.path()).unwrap();
        assert_eq!(config.per_page, 12);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PaginateConfig::load("/nonexistent/paginate.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
