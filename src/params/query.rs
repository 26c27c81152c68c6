//! Query string parsing and building with bracketed parameter names

use crate::types::{JsonValue, ParamMap};
use regex::Regex;
use std::sync::LazyLock;
use url::form_urlencoded;

/// Anything other than word characters and hyphens makes a name "nested"
static NON_SIMPLE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w-]").unwrap());

/// Whether `name` can be used as a flat parameter key (`page`, `list-page`)
///
/// Names such as `list[page]` need to be expanded with [`nest_param`].
pub fn is_simple_param_name(name: &str) -> bool {
    !NON_SIMPLE_NAME.is_match(name)
}

/// Parse a query string into a nested parameter map
///
/// `a=1&list[page]=2&tags[]=x&tags[]=y` becomes
/// `{"a": "1", "list": {"page": "2"}, "tags": ["x", "y"]}`.
pub fn parse_nested_query(query: &str) -> ParamMap {
    let mut params = ParamMap::new();
    for (name, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        normalize_params(&mut params, &name, JsonValue::String(value.into_owned()));
    }
    params
}

/// Build the nested map for a single, possibly bracketed, parameter name
///
/// `nest_param("list[page]", 3)` gives `{"list": {"page": 3}}`.
pub fn nest_param(name: &str, value: impl Into<JsonValue>) -> ParamMap {
    let mut params = ParamMap::new();
    normalize_params(&mut params, name, value.into());
    params
}

/// Look up a possibly bracketed parameter name: `list[page]` finds `params["list"]["page"]`
pub fn find_param<'a>(params: &'a ParamMap, name: &str) -> Option<&'a JsonValue> {
    let (key, mut after) = split_name(name);
    let mut current = params.get(key)?;
    while !after.is_empty() {
        let (key, rest) = split_name(after);
        if key.is_empty() {
            return None;
        }
        current = current.as_object()?.get(key)?;
        after = rest;
    }
    Some(current)
}

/// Split `list[page][n]` into `("list", "[page][n]")`
fn split_name(name: &str) -> (&str, &str) {
    let trimmed = name.trim_start_matches(['[', ']']);
    let key_end = trimmed.find(['[', ']']).unwrap_or(trimmed.len());
    let (key, rest) = trimmed.split_at(key_end);
    (key, rest.strip_prefix(']').unwrap_or(rest))
}

fn normalize_params(params: &mut ParamMap, name: &str, value: JsonValue) {
    let (key, after) = split_name(name);
    if key.is_empty() {
        return;
    }

    if after.is_empty() {
        params.insert(key.to_string(), value);
        return;
    }

    if after == "[]" {
        let slot = params
            .entry(key.to_string())
            .or_insert_with(|| JsonValue::Array(Vec::new()));
        if !slot.is_array() {
            *slot = JsonValue::Array(Vec::new());
        }
        if let JsonValue::Array(items) = slot {
            items.push(value);
        }
        return;
    }

    if let Some(child) = after.strip_prefix("[]") {
        // tags[][name]=a&tags[][name]=b starts a new hash per repeated child key
        let (child_key, _) = split_name(child);
        let slot = params
            .entry(key.to_string())
            .or_insert_with(|| JsonValue::Array(Vec::new()));
        if !slot.is_array() {
            *slot = JsonValue::Array(Vec::new());
        }
        if let JsonValue::Array(items) = slot {
            let reuse_last = matches!(
                items.last(),
                Some(JsonValue::Object(last)) if !last.contains_key(child_key)
            );
            if reuse_last {
                if let Some(JsonValue::Object(last)) = items.last_mut() {
                    normalize_params(last, child, value);
                }
            } else {
                let mut fresh = ParamMap::new();
                normalize_params(&mut fresh, child, value);
                items.push(JsonValue::Object(fresh));
            }
        }
        return;
    }

    let slot = params
        .entry(key.to_string())
        .or_insert_with(|| JsonValue::Object(ParamMap::new()));
    if !slot.is_object() {
        *slot = JsonValue::Object(ParamMap::new());
    }
    if let JsonValue::Object(nested) = slot {
        normalize_params(nested, after, value);
    }
}

/// Encode a nested parameter map as a query string
///
/// Keys come out sorted; nested keys use brackets (`list%5Bpage%5D=3`).
pub fn to_query(params: &ParamMap) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key, value, &mut pairs);
    }
    // stable: repeated `tags[]` keep their order
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn flatten(prefix: &str, value: &JsonValue, pairs: &mut Vec<(String, String)>) {
    match value {
        JsonValue::Object(map) => {
            for (key, nested) in map {
                flatten(&format!("{prefix}[{key}]"), nested, pairs);
            }
        }
        JsonValue::Array(items) => {
            for item in items {
                flatten(&format!("{prefix}[]"), item, pairs);
            }
        }
        JsonValue::String(s) => pairs.push((prefix.to_string(), s.clone())),
        JsonValue::Null => pairs.push((prefix.to_string(), String::new())),
        other => pairs.push((prefix.to_string(), other.to_string())),
    }
}
