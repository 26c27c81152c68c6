//! Template interpolation for pagination messages
//!
//! Handles `{{ variable }}` interpolation in message templates such as
//! `Displaying {{ plural }} <b>{{ from }}&nbsp;-&nbsp;{{ to }}</b>`.
//! Supports nested access like `{{ collection.total_pages }}`.

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable.path }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)\s*\}\}").unwrap()
});

/// Context for template interpolation
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: Map<String, Value>,
}

impl TemplateContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Get a value by path (e.g., "collection.total_pages")
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.vars.get(parts.next()?)?;
        for part in parts {
            match current {
                Value::Object(map) => {
                    current = map.get(part)?;
                }
                _ => return None,
            }
        }
        Some(current)
    }
}

/// Render a template string with the given context
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    if !has_templates(template) {
        return Ok(template.to_string());
    }

    // one pass over the template; substituted values are never re-scanned
    let mut errors = Vec::new();
    let result = TEMPLATE_REGEX.replace_all(template, |cap: &Captures<'_>| {
        let var_path = cap.get(1).unwrap().as_str();
        match ctx.get(var_path) {
            Some(value) => value_to_string(value),
            None => {
                errors.push(var_path.to_string());
                String::new()
            }
        }
    });

    if errors.is_empty() {
        Ok(result.into_owned())
    } else {
        Err(Error::undefined_var(errors.join(", ")))
    }
}

/// Check if a string contains template variables
pub fn has_templates(s: &str) -> bool {
    TEMPLATE_REGEX.is_match(s)
}

/// Extract all variable names from a template
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .map(|cap| cap.get(1).unwrap().as_str().to_string())
        .collect()
}

/// Check that a template only references the given variables
pub fn validate(template: &str, allowed: &[&str]) -> Result<()> {
    let unknown: Vec<String> = extract_variables(template)
        .into_iter()
        .filter(|var| {
            let root = var.split('.').next().unwrap_or(var);
            !allowed.contains(&root)
        })
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::template(format!(
            "unknown variables in '{template}': {}",
            unknown.join(", ")
        )))
    }
}

/// Convert a JSON value to a string for template substitution
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // For complex types, use JSON serialization
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
