//! Format convenience matchers: regex matchers over fixed built-in patterns.
//!
//! Each format has a default example. Static defaults are literals; the
//! date/time defaults format the current instant. Both are produced in a form
//! that satisfies the format's own pattern, so the no-argument builders are
//! infallible and skip validation.

use crate::builders::term;
use crate::error::Result;
use crate::matcher::MatcherNode;
use crate::template::Template;
use crate::validate::CompiledPattern;
use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const UUID_FORMAT: &str = "[0-9a-f]{8}(-[0-9a-f]{4}){3}-[0-9a-f]{12}";

pub const EMAIL_FORMAT: &str = concat!(
    r#"(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
    r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))"
);

pub const IPV4_FORMAT: &str =
    r"((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)";

pub const IPV6_FORMAT: &str = concat!(
    r"([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}",
    r"|([0-9a-fA-F]{1,4}:){1,7}:",
    r"|([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}",
    r"|([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}",
    r"|([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}",
    r"|([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}",
    r"|([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}",
    r"|[0-9a-fA-F]{1,4}:(:[0-9a-fA-F]{1,4}){1,6}",
    r"|:((:[0-9a-fA-F]{1,4}){1,7}|:)"
);

pub const HEX_FORMAT: &str = "[0-9a-fA-F]+";

pub const RFC1123_TIMESTAMP_FORMAT: &str = concat!(
    r"(Mon|Tue|Wed|Thu|Fri|Sat|Sun),\s\d{2}\s",
    r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s\d{4}\s",
    r"\d{2}:\d{2}:\d{2}\s(\+|-)\d{4}"
);

pub const ISO8601_DATE_FORMAT: &str = r"[+-]?\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])";

pub const ISO8601_DATETIME_FORMAT: &str =
    r"\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\d(([+-][0-2]\d:[0-5]\d)|Z)";

pub const ISO8601_DATETIME_WITH_MILLIS_FORMAT: &str =
    r"\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\d\.\d{1,6}(([+-][0-2]\d:?[0-5]\d)|Z)";

pub const ISO8601_TIME_FORMAT: &str =
    r"T?[0-2]\d:[0-5]\d(:[0-5]\d)?(\.\d{1,9})?(([+-][0-2]\d:[0-5]\d)|Z)?";

/// Built-in formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Uuid,
    Email,
    Ipv4Address,
    Ipv6Address,
    Hexadecimal,
    Rfc1123Timestamp,
    Iso8601Date,
    Iso8601DateTime,
    Iso8601DateTimeWithMillis,
    Iso8601Time,
}

static COMPILED: Lazy<HashMap<Format, CompiledPattern>> = Lazy::new(|| {
    Format::ALL
        .iter()
        .map(|format| {
            let compiled = CompiledPattern::compile(format.pattern())
                .unwrap_or_else(|e| panic!("built-in {format:?} pattern must compile: {e}"));
            (*format, compiled)
        })
        .collect()
});

impl Format {
    pub const ALL: [Format; 10] = [
        Format::Uuid,
        Format::Email,
        Format::Ipv4Address,
        Format::Ipv6Address,
        Format::Hexadecimal,
        Format::Rfc1123Timestamp,
        Format::Iso8601Date,
        Format::Iso8601DateTime,
        Format::Iso8601DateTimeWithMillis,
        Format::Iso8601Time,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Uuid => "uuid",
            Format::Email => "email",
            Format::Ipv4Address => "ipv4Address",
            Format::Ipv6Address => "ipv6Address",
            Format::Hexadecimal => "hexadecimal",
            Format::Rfc1123Timestamp => "rfc1123Timestamp",
            Format::Iso8601Date => "iso8601Date",
            Format::Iso8601DateTime => "iso8601DateTime",
            Format::Iso8601DateTimeWithMillis => "iso8601DateTimeWithMillis",
            Format::Iso8601Time => "iso8601Time",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            Format::Uuid => UUID_FORMAT,
            Format::Email => EMAIL_FORMAT,
            Format::Ipv4Address => IPV4_FORMAT,
            Format::Ipv6Address => IPV6_FORMAT,
            Format::Hexadecimal => HEX_FORMAT,
            Format::Rfc1123Timestamp => RFC1123_TIMESTAMP_FORMAT,
            Format::Iso8601Date => ISO8601_DATE_FORMAT,
            Format::Iso8601DateTime => ISO8601_DATETIME_FORMAT,
            Format::Iso8601DateTimeWithMillis => ISO8601_DATETIME_WITH_MILLIS_FORMAT,
            Format::Iso8601Time => ISO8601_TIME_FORMAT,
        }
    }

    /// Default example for the current instant.
    pub fn default_example(&self) -> String {
        self.example_at(Utc::now())
    }

    /// Default example for a given instant. Only the date/time formats depend
    /// on `now`.
    pub fn example_at(&self, now: DateTime<Utc>) -> String {
        match self {
            Format::Uuid => "ce118b6e-d8e1-11e7-9296-cec278b6b50a".to_string(),
            Format::Email => "hello@pact.io".to_string(),
            Format::Ipv4Address => "127.0.0.13".to_string(),
            Format::Ipv6Address => "2001:db8::ff00:42:8329".to_string(),
            Format::Hexadecimal => "3F".to_string(),
            Format::Rfc1123Timestamp => now.format("%a, %d %b %Y %H:%M:%S %z").to_string(),
            Format::Iso8601Date => now.format("%Y-%m-%d").to_string(),
            Format::Iso8601DateTime => now.to_rfc3339_opts(SecondsFormat::Secs, true),
            Format::Iso8601DateTimeWithMillis => now.to_rfc3339_opts(SecondsFormat::Millis, true),
            Format::Iso8601Time => now.format("T%H:%M:%S").to_string(),
        }
    }

    /// Check an example against this format.
    pub fn accepts(&self, example: &str) -> bool {
        COMPILED
            .get(self)
            .map(|compiled| compiled.is_full_match(example))
            .unwrap_or(false)
    }

    /// Matcher over the default example. Never fails.
    pub fn matcher(&self) -> MatcherNode {
        MatcherNode::regex_unchecked(Template::String(self.default_example()), self.pattern())
    }

    /// Matcher over a caller-supplied example.
    ///
    /// # Errors
    ///
    /// [`MatcherError::Validation`](crate::MatcherError::Validation) if the
    /// example does not match the format.
    pub fn matcher_with(&self, example: &str) -> Result<MatcherNode> {
        term(example, self.pattern())
    }

    fn build(&self, example: Option<&str>) -> Result<MatcherNode> {
        match example {
            Some(example) => self.matcher_with(example),
            None => Ok(self.matcher()),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical 8-4-4-4-12 lowercase hex UUID.
pub fn uuid(example: Option<&str>) -> Result<MatcherNode> {
    Format::Uuid.build(example)
}

pub fn email(example: Option<&str>) -> Result<MatcherNode> {
    Format::Email.build(example)
}

/// Dotted quad, each octet 0-255.
pub fn ipv4_address(example: Option<&str>) -> Result<MatcherNode> {
    Format::Ipv4Address.build(example)
}

/// Full or `::`-compressed hextet groups.
pub fn ipv6_address(example: Option<&str>) -> Result<MatcherNode> {
    Format::Ipv6Address.build(example)
}

pub fn hexadecimal(example: Option<&str>) -> Result<MatcherNode> {
    Format::Hexadecimal.build(example)
}

pub fn rfc1123_timestamp(example: Option<&str>) -> Result<MatcherNode> {
    Format::Rfc1123Timestamp.build(example)
}

/// Calendar dates (`YYYY-MM-DD`, optionally signed). Week dates (`2024-W05-3`)
/// and ordinal dates (`2024-123`) are not accepted.
pub fn iso8601_date(example: Option<&str>) -> Result<MatcherNode> {
    Format::Iso8601Date.build(example)
}

pub fn iso8601_date_time(example: Option<&str>) -> Result<MatcherNode> {
    Format::Iso8601DateTime.build(example)
}

/// Fractional seconds of 1-6 digits with `Z` or a numeric offset.
pub fn iso8601_date_time_with_millis(example: Option<&str>) -> Result<MatcherNode> {
    Format::Iso8601DateTimeWithMillis.build(example)
}

pub fn iso8601_time(example: Option<&str>) -> Result<MatcherNode> {
    Format::Iso8601Time.build(example)
}
