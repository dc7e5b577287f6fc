//! Example validation against regular expression patterns.
//!
//! Patterns are matched against the whole example: `\w+` accepts
//! `"myawesomeword"` but rejects `"my awesome word"`, even though the latter
//! contains a matching substring.

use crate::error::{MatcherError, Result};
use regex::Regex;
use std::sync::Arc;

/// Check whether `example` matches `pattern` across its entire length.
///
/// Returns `Ok(false)` for a non-matching example and a
/// [`MatcherError::Pattern`] when `pattern` does not compile.
pub fn validate_example(example: &str, pattern: &str) -> Result<bool> {
    let compiled = CompiledPattern::compile(pattern)?;
    Ok(compiled.is_full_match(example))
}

/// A pattern compiled for full-string matching.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    anchored: Arc<Regex>,
}

impl CompiledPattern {
    /// Compile a pattern source.
    ///
    /// The source is compiled on its own first so that a fragment such as
    /// `a)|(b` is rejected instead of becoming valid once wrapped in anchors.
    pub fn compile(pattern: &str) -> Result<Self> {
        Regex::new(pattern).map_err(|e| pattern_error(pattern, e))?;
        let anchored =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|e| pattern_error(pattern, e))?;

        Ok(CompiledPattern {
            source: pattern.to_string(),
            anchored: Arc::new(anchored),
        })
    }

    /// The pattern as written, without the added anchors.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_full_match(&self, example: &str) -> bool {
        self.anchored.is_match(example)
    }
}

fn pattern_error(pattern: &str, source: regex::Error) -> MatcherError {
    MatcherError::Pattern {
        pattern: pattern.to_string(),
        source: Box::new(source),
    }
}
