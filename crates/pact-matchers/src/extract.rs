//! Payload extraction: strip matcher metadata from a template.
//!
//! Extraction replaces every matcher node by its example, recursively, and
//! leaves plain values untouched. Cardinality nodes need no special handling:
//! their example is already an array of `min` copies, which is mapped over like
//! any other array.

use crate::matcher::is_matcher_json;
use crate::template::Template;
use serde_json::{Map, Value};

/// Produce the canonical example document implied by a template.
///
/// Total over templates: never fails and never retains its input.
pub fn extract_payload(template: &Template) -> Value {
    match template {
        Template::Null => Value::Null,
        Template::Bool(b) => Value::Bool(*b),
        Template::Number(n) => Value::Number(n.clone()),
        Template::String(s) => Value::String(s.clone()),
        Template::Matcher(node) => extract_payload(node.value()),
        Template::Array(items) => Value::Array(items.iter().map(extract_payload).collect()),
        Template::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.to_string(), extract_payload(v)))
                .collect::<Map<String, Value>>(),
        ),
    }
}

/// Extract the example from a wire-shaped JSON document.
///
/// Any mapping carrying the matcher discriminant is replaced by the extraction
/// of its `value` field (`null` when absent). Matcher-free input comes back
/// unchanged.
pub fn extract_json(value: &Value) -> Value {
    match value {
        Value::Object(map) if is_matcher_json(value) => {
            map.get("value").map(extract_json).unwrap_or(Value::Null)
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), extract_json(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(extract_json).collect()),
        other => other.clone(),
    }
}
