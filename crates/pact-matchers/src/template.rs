//! Template values: plain JSON-compatible literals mixed with matcher nodes.

use crate::matcher::MatcherNode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// A value tree authored by a consumer to describe an interaction body.
///
/// Matcher nodes may appear at any depth, including inside other matchers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Template {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Template>),
    Object(TemplateMap),
    Matcher(MatcherNode),
}

impl Template {
    /// Convert plain JSON into a template, treating every mapping as a
    /// literal. Use [`Template::from_json`] to recognize wire-shaped matchers.
    pub fn from_plain(value: Value) -> Self {
        match value {
            Value::Null => Template::Null,
            Value::Bool(b) => Template::Bool(b),
            Value::Number(n) => Template::Number(n),
            Value::String(s) => Template::String(s),
            Value::Array(items) => {
                Template::Array(items.into_iter().map(Template::from_plain).collect())
            }
            Value::Object(map) => Template::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Template::from_plain(v)))
                    .collect(),
            ),
        }
    }

    /// Build an object template from key/value pairs, keeping their order.
    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Template)>,
        K: Into<String>,
    {
        Template::Object(entries.into_iter().collect())
    }

    /// Wire representation: plain values as-is, matchers as tagged mappings.
    pub fn to_json(&self) -> Value {
        match self {
            Template::Null => Value::Null,
            Template::Bool(b) => Value::Bool(*b),
            Template::Number(n) => Value::Number(n.clone()),
            Template::String(s) => Value::String(s.clone()),
            Template::Array(items) => Value::Array(items.iter().map(Template::to_json).collect()),
            Template::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
            Template::Matcher(node) => node.to_json(),
        }
    }

    pub fn as_matcher(&self) -> Option<&MatcherNode> {
        match self {
            Template::Matcher(node) => Some(node),
            _ => None,
        }
    }

    /// True if no matcher node appears anywhere in this tree.
    pub fn is_plain(&self) -> bool {
        match self {
            Template::Matcher(_) => false,
            Template::Array(items) => items.iter().all(Template::is_plain),
            Template::Object(map) => map.values().all(Template::is_plain),
            _ => true,
        }
    }

    /// String form used when validating a `term` example.
    ///
    /// Works on the extracted payload, so a nested matcher renders like its
    /// example. Strings are used verbatim; everything else is compact JSON
    /// (`10`, `true`, `null`, `{"a":1}`).
    pub(crate) fn example_text(&self) -> String {
        match self {
            Template::String(s) => s.clone(),
            Template::Null => "null".to_string(),
            Template::Bool(b) => b.to_string(),
            Template::Number(n) => n.to_string(),
            other => match crate::extract::extract_payload(other) {
                Value::String(s) => s,
                payload => payload.to_string(),
            },
        }
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Template::from_json(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for MatcherNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Insertion-ordered mapping of template values.
///
/// Inserting an existing key replaces its value in place. Equality ignores
/// key order, as JSON object equality does.
#[derive(Debug, Clone, Default)]
pub struct TemplateMap {
    entries: Vec<(String, Template)>,
}

impl TemplateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Template>) -> Option<Template> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Chainable insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Template>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Template> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Template> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl PartialEq for TemplateMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).map(|o| o == v).unwrap_or(false))
    }
}

impl<K: Into<String>, V: Into<Template>> FromIterator<(K, V)> for TemplateMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TemplateMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for TemplateMap {
    type Item = (String, Template);
    type IntoIter = std::vec::IntoIter<(String, Template)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ===== Conversions =====

impl From<bool> for Template {
    fn from(b: bool) -> Self {
        Template::Bool(b)
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Template::String(s.to_string())
    }
}

impl From<String> for Template {
    fn from(s: String) -> Self {
        Template::String(s)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Template {
                fn from(n: $ty) -> Self {
                    Template::Number(Number::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for Template {
    /// Non-finite floats have no JSON form and become `Null`.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map(Template::Number).unwrap_or(Template::Null)
    }
}

impl From<f32> for Template {
    fn from(n: f32) -> Self {
        Template::from(f64::from(n))
    }
}

impl From<Number> for Template {
    fn from(n: Number) -> Self {
        Template::Number(n)
    }
}

impl<T: Into<Template>> From<Vec<T>> for Template {
    fn from(items: Vec<T>) -> Self {
        Template::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Template>> From<Option<T>> for Template {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Template::Null)
    }
}

impl From<TemplateMap> for Template {
    fn from(map: TemplateMap) -> Self {
        Template::Object(map)
    }
}

impl From<MatcherNode> for Template {
    fn from(node: MatcherNode) -> Self {
        Template::Matcher(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_plain_keeps_matcher_shaped_maps_literal() {
        let value = json!({"value": 1, "pact:matcher:type": "type"});
        let template = Template::from_plain(value.clone());
        assert!(matches!(template, Template::Object(_)));
        assert!(template.is_plain());
        assert_eq!(template.to_json(), value);
    }

    #[test]
    fn test_map_insert_replaces_in_place() {
        let mut map = TemplateMap::new();
        assert!(map.insert("a", 1).is_none());
        map.insert("b", 2);
        let previous = map.insert("a", 3);

        assert_eq!(previous, Some(Template::from(1)));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Template::from(3)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_map_equality_ignores_order() {
        let left = TemplateMap::new().with("a", 1).with("b", "x");
        let right = TemplateMap::new().with("b", "x").with("a", 1);
        assert_eq!(left, right);
        assert_ne!(left, TemplateMap::new().with("a", 1));
    }

    #[test]
    fn test_to_json_preserves_insertion_order() {
        let template = Template::object([
            ("zeta", Template::from(1)),
            ("alpha", Template::from(2)),
            ("mid", Template::from(3)),
        ]);
        let text = serde_json::to_string(&template).unwrap();
        assert_eq!(text, r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Template::from(true), Template::Bool(true));
        assert_eq!(Template::from("s"), Template::String("s".to_string()));
        assert_eq!(Template::from(10u8).to_json(), json!(10));
        assert_eq!(Template::from(1.5).to_json(), json!(1.5));
        assert_eq!(Template::from(f64::NAN), Template::Null);
        assert_eq!(Template::from(None::<i32>), Template::Null);
        assert_eq!(Template::from(vec![1, 2]).to_json(), json!([1, 2]));
    }

    #[test]
    fn test_example_text() {
        assert_eq!(Template::from("abc").example_text(), "abc");
        assert_eq!(Template::from(10).example_text(), "10");
        assert_eq!(Template::from(false).example_text(), "false");
        assert_eq!(Template::Null.example_text(), "null");
        assert_eq!(
            Template::object([("a", Template::from(1))]).example_text(),
            r#"{"a":1}"#
        );
    }

    #[test]
    fn test_is_plain_detects_nested_matchers() {
        let nested = Template::from(vec![Template::object([(
            "id",
            Template::Matcher(MatcherNode::type_of(Template::from(1))),
        )])]);
        assert!(!nested.is_plain());
        assert!(Template::from_plain(json!({"a": [1, {"b": null}]})).is_plain());
    }
}
