//! Error types for matcher construction.

/// Errors raised while building or parsing matcher templates.
///
/// Every error is raised at construction time. Extraction never fails.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    /// Malformed builder arguments: a missing field, a wrong value kind, an
    /// example failing its pattern or a non-positive cardinality.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The pattern source is not a valid regular expression.
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}

impl MatcherError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        MatcherError::Validation(message.into())
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, MatcherError::Validation(_))
    }

    /// Check if this is a pattern compilation error.
    pub fn is_pattern(&self) -> bool {
        matches!(self, MatcherError::Pattern { .. })
    }
}

pub type Result<T, E = MatcherError> = std::result::Result<T, E>;
