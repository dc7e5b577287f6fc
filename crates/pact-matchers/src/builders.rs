//! Matcher builders: `term`, `like` and `each_like`, plus the primitive
//! type wrappers.
//!
//! Builders never inspect or rewrite their input: nested matchers placed by
//! the caller are kept verbatim and only flattened by
//! [`extract_payload`](crate::extract_payload).

use crate::error::{MatcherError, Result};
use crate::matcher::MatcherNode;
use crate::template::Template;
use crate::validate::CompiledPattern;

/// Default example for [`string`].
pub const DEFAULT_STRING: &str = "some string";
/// Default example for [`decimal`].
pub const DEFAULT_DECIMAL: f64 = 13.01;
/// Default example for [`integer`].
pub const DEFAULT_INTEGER: i64 = 13;

/// Regex matcher: `generate` must match `matcher` in full.
///
/// A non-string `generate` is checked through its string form (see
/// [`Template`] for how containers are rendered).
///
/// # Errors
///
/// [`MatcherError::Pattern`] if `matcher` does not compile,
/// [`MatcherError::Validation`] if the example does not match.
pub fn term(generate: impl Into<Template>, matcher: &str) -> Result<MatcherNode> {
    let generate = generate.into();
    let pattern = CompiledPattern::compile(matcher)?;
    let text = generate.example_text();

    if !pattern.is_full_match(&text) {
        return Err(MatcherError::validation(format!(
            "Example '{text}' does not match provided regular expression '{matcher}'"
        )));
    }

    Ok(MatcherNode::regex_unchecked(generate, matcher))
}

/// Type matcher: the shape of `value` is the contract.
pub fn like(value: impl Into<Template>) -> MatcherNode {
    MatcherNode::type_of(value.into())
}

/// Alias of [`like`].
pub fn something_like(value: impl Into<Template>) -> MatcherNode {
    like(value)
}

/// Array matcher: at least `min` elements shaped like `content`.
///
/// `min` defaults to 1. The content is cloned into every slot so the wire
/// example is self-describing; the copies are identical.
///
/// # Errors
///
/// [`MatcherError::Validation`] if `min` is 0.
pub fn each_like(content: impl Into<Template>, min: Option<usize>) -> Result<MatcherNode> {
    let min = min.unwrap_or(1);
    if min < 1 {
        return Err(MatcherError::validation(format!(
            "eachLike requires a minimum of at least 1, got {min}"
        )));
    }

    let items = vec![content.into(); min];
    Ok(MatcherNode::min_type_unchecked(items, min))
}

/// Boolean type matcher. Defaults to `true`.
pub fn boolean(value: Option<bool>) -> MatcherNode {
    like(value.unwrap_or(true))
}

/// String type matcher. Defaults to [`DEFAULT_STRING`].
pub fn string(value: Option<&str>) -> MatcherNode {
    like(value.unwrap_or(DEFAULT_STRING))
}

/// Decimal type matcher. Defaults to [`DEFAULT_DECIMAL`].
pub fn decimal(value: Option<f64>) -> MatcherNode {
    like(value.unwrap_or(DEFAULT_DECIMAL))
}

/// Integer type matcher. Defaults to [`DEFAULT_INTEGER`].
pub fn integer(value: Option<i64>) -> MatcherNode {
    like(value.unwrap_or(DEFAULT_INTEGER))
}
