//! Matcher templates for consumer-driven contract tests.
//!
//! A consumer describes an expected interaction body as a [`Template`]: plain
//! literals mixed with matcher nodes that carry a rule alongside their example
//! (a regular expression, type-only equality, or a minimum array length).
//! A template converts two ways:
//!
//! - [`Template::to_json`] produces the wire document with matcher metadata
//!   (`"pact:matcher:type"`, `regex`, `min`) embedded.
//! - [`extract_payload`] strips every matcher and returns the plain example.
//!
//! # Example
//!
//! ```
//! use pact_matchers::{each_like, extract_payload, like, term, Template};
//! use serde_json::json;
//!
//! let body = Template::object([
//!     ("a", Template::from("data")),
//!     ("b", like(true).into()),
//!     ("c", each_like("x", Some(2))?.into()),
//!     ("d", term("red", "red|green")?.into()),
//! ]);
//!
//! assert_eq!(
//!     extract_payload(&body),
//!     json!({"a": "data", "b": true, "c": ["x", "x"], "d": "red"})
//! );
//! # Ok::<(), pact_matchers::MatcherError>(())
//! ```

mod builders;
mod error;
mod extract;
mod formats;
mod matcher;
mod template;
mod validate;
mod wire;

pub use builders::{
    boolean, decimal, each_like, integer, like, something_like, string, term, DEFAULT_DECIMAL,
    DEFAULT_INTEGER, DEFAULT_STRING,
};
pub use error::{MatcherError, Result};
pub use extract::{extract_json, extract_payload};
pub use formats::{
    email, hexadecimal, ipv4_address, ipv6_address, iso8601_date, iso8601_date_time,
    iso8601_date_time_with_millis, iso8601_time, rfc1123_timestamp, uuid, Format, EMAIL_FORMAT,
    HEX_FORMAT, IPV4_FORMAT, IPV6_FORMAT, ISO8601_DATETIME_FORMAT,
    ISO8601_DATETIME_WITH_MILLIS_FORMAT, ISO8601_DATE_FORMAT, ISO8601_TIME_FORMAT,
    RFC1123_TIMESTAMP_FORMAT, UUID_FORMAT,
};
pub use matcher::{
    is_matcher, is_matcher_json, MatcherKind, MatcherNode, MatcherRule, MATCHER_TYPE_KEY,
};
pub use template::{Template, TemplateMap};
pub use validate::{validate_example, CompiledPattern};
