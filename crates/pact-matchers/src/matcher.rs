//! Matcher nodes: tagged wrappers around an example value.
//!
//! A node carries an example plus a rule describing which real values satisfy
//! the contract. Nodes are only produced by the builders in
//! [`crate::builders`] and [`crate::formats`] or by validated wire parsing, so
//! every node in a template already satisfies its own invariants:
//!
//! - a regex node's example matches its pattern in full
//! - a cardinality node has `min >= 1` and exactly `min` copies of its content

use crate::template::Template;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discriminant field carried by every matcher on the wire.
pub const MATCHER_TYPE_KEY: &str = "pact:matcher:type";

/// Wire discriminant of a matcher node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    /// Example must match a regular expression.
    Regex,
    /// Example's shape is the contract; content is illustrative.
    Type,
}

impl MatcherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatcherKind::Regex => "regex",
            MatcherKind::Type => "type",
        }
    }

    /// Parse a wire discriminant. Unknown kinds yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "regex" => Some(MatcherKind::Regex),
            "type" => Some(MatcherKind::Type),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a matcher node applies to its example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatcherRule {
    /// Full-string regular expression match (`term`).
    Regex(String),
    /// Type-only equality (`like`).
    Type,
    /// Type-only equality over an array of at least `min` elements (`eachLike`).
    MinType(usize),
}

/// An immutable matcher node.
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherNode {
    value: Box<Template>,
    rule: MatcherRule,
}

impl MatcherNode {
    /// Build a regex node without checking the example. Callers guarantee the
    /// example matches `regex` in full.
    pub(crate) fn regex_unchecked(value: Template, regex: impl Into<String>) -> Self {
        MatcherNode {
            value: Box::new(value),
            rule: MatcherRule::Regex(regex.into()),
        }
    }

    pub(crate) fn type_of(value: Template) -> Self {
        MatcherNode {
            value: Box::new(value),
            rule: MatcherRule::Type,
        }
    }

    /// Build a cardinality node from already duplicated items. Callers
    /// guarantee `items.len() == min` and `min >= 1`.
    pub(crate) fn min_type_unchecked(items: Vec<Template>, min: usize) -> Self {
        debug_assert!(min >= 1 && items.len() == min);
        MatcherNode {
            value: Box::new(Template::Array(items)),
            rule: MatcherRule::MinType(min),
        }
    }

    pub fn kind(&self) -> MatcherKind {
        match self.rule {
            MatcherRule::Regex(_) => MatcherKind::Regex,
            MatcherRule::Type | MatcherRule::MinType(_) => MatcherKind::Type,
        }
    }

    pub fn rule(&self) -> &MatcherRule {
        &self.rule
    }

    /// The example carried by this node. For cardinality nodes this is the
    /// array of duplicated content.
    pub fn value(&self) -> &Template {
        &self.value
    }

    /// The pattern of a regex node.
    pub fn regex(&self) -> Option<&str> {
        match &self.rule {
            MatcherRule::Regex(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// The minimum cardinality of an `eachLike` node.
    pub fn min(&self) -> Option<usize> {
        match self.rule {
            MatcherRule::MinType(min) => Some(min),
            _ => None,
        }
    }

    /// Consume the node, returning its example.
    pub fn into_value(self) -> Template {
        *self.value
    }

    /// Wire representation of this node, nested matchers included.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("value".to_string(), self.value.to_json());
        if let MatcherRule::Regex(pattern) = &self.rule {
            map.insert("regex".to_string(), Value::String(pattern.clone()));
        }
        map.insert(
            MATCHER_TYPE_KEY.to_string(),
            Value::String(self.kind().as_str().to_string()),
        );
        if let MatcherRule::MinType(min) = self.rule {
            map.insert("min".to_string(), Value::from(min));
        }
        Value::Object(map)
    }

    /// The canonical example with all matcher metadata removed.
    pub fn example(&self) -> Value {
        crate::extract::extract_payload(&self.value)
    }
}

/// Check whether a template is a matcher node, whichever builder produced it.
pub fn is_matcher(template: &Template) -> bool {
    matches!(template, Template::Matcher(_))
}

/// Duck-typed check on raw JSON: true iff `value` is a mapping carrying the
/// matcher discriminant field.
pub fn is_matcher_json(value: &Value) -> bool {
    value
        .as_object()
        .map(|obj| obj.contains_key(MATCHER_TYPE_KEY))
        .unwrap_or(false)
}
