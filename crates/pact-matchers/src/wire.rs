//! Parsing wire-shaped JSON back into templates.
//!
//! Mappings carrying the matcher discriminant are rebuilt into matcher nodes
//! and re-validated, so a parsed template upholds the same invariants as one
//! assembled through the builders.

use crate::builders::{like, term};
use crate::error::{MatcherError, Result};
use crate::matcher::{MatcherKind, MatcherNode, MATCHER_TYPE_KEY};
use crate::template::{Template, TemplateMap};
use serde_json::{Map, Value};
use tracing::debug;

impl Template {
    /// Parse a wire document, recognizing matcher mappings.
    ///
    /// # Errors
    ///
    /// [`MatcherError::Validation`] for matcher mappings with an unknown kind,
    /// a missing `value` or `regex` field, an invalid `min`, or an example that
    /// fails its pattern. [`MatcherError::Pattern`] for an invalid `regex`.
    pub fn from_json(value: Value) -> Result<Template> {
        match value {
            Value::Object(map) if map.contains_key(MATCHER_TYPE_KEY) => {
                parse_matcher(map).map(Template::Matcher)
            }
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| Ok((k, Template::from_json(v)?)))
                .collect::<Result<TemplateMap>>()
                .map(Template::Object),
            Value::Array(items) => items
                .into_iter()
                .map(Template::from_json)
                .collect::<Result<Vec<_>>>()
                .map(Template::Array),
            other => Ok(Template::from_plain(other)),
        }
    }

    /// Parse a wire document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Template> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| MatcherError::validation(format!("Invalid JSON: {e}")))?;
        Template::from_json(value)
    }
}

fn parse_matcher(mut map: Map<String, Value>) -> Result<MatcherNode> {
    let kind = match map.get(MATCHER_TYPE_KEY) {
        Some(Value::String(s)) => MatcherKind::parse(s).ok_or_else(|| {
            debug!(kind = %s, "Rejecting matcher with unknown kind");
            MatcherError::validation(format!("Unknown matcher type: {s}"))
        })?,
        other => {
            return Err(MatcherError::validation(format!(
                "Matcher type must be a string, got {}",
                other.cloned().unwrap_or(Value::Null)
            )))
        }
    };

    let value = map.remove("value").ok_or_else(|| {
        MatcherError::validation(format!("{kind} matcher is missing its 'value' field"))
    })?;

    match kind {
        MatcherKind::Regex => {
            let regex = map
                .get("regex")
                .and_then(Value::as_str)
                .ok_or_else(|| MatcherError::validation("regex matcher is missing its 'regex' field"))?;
            term(Template::from_json(value)?, regex)
        }
        MatcherKind::Type => match map.get("min") {
            Some(min) => parse_min_type(value, min),
            None => Ok(like(Template::from_json(value)?)),
        },
    }
}

fn parse_min_type(value: Value, min: &Value) -> Result<MatcherNode> {
    let min = min
        .as_u64()
        .filter(|m| *m >= 1)
        .and_then(|m| usize::try_from(m).ok())
        .ok_or_else(|| {
            MatcherError::validation(format!("'min' must be a positive integer, got {min}"))
        })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(MatcherError::validation(format!(
                "eachLike value must be an array, got {other}"
            )))
        }
    };

    if items.len() != min {
        debug!(min, len = items.len(), "Rejecting eachLike with mismatched length");
        return Err(MatcherError::validation(format!(
            "eachLike value must hold exactly {min} elements, got {}",
            items.len()
        )));
    }

    let items = items
        .into_iter()
        .map(Template::from_json)
        .collect::<Result<Vec<_>>>()?;
    Ok(MatcherNode::min_type_unchecked(items, min))
}
