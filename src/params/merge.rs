//! Deep-merge of parameter maps

use crate::types::{JsonValue, ParamMap};

/// Merge `other` into `target`, recursing into nested maps
///
/// A nested map in `other` merges into a nested map in `target`, fills a
/// missing key with a copy, and replaces a scalar. Scalars in `other` always
/// overwrite. Every key of `other` is visited.
pub fn stringified_merge(target: &mut ParamMap, other: &ParamMap) {
    for (key, value) in other {
        match value {
            JsonValue::Object(nested) => {
                let existing = target
                    .entry(key.clone())
                    .or_insert_with(|| JsonValue::Object(ParamMap::new()));
                match existing {
                    JsonValue::Object(existing) => stringified_merge(existing, nested),
                    slot => *slot = value.clone(),
                }
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
