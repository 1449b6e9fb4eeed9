//! Hostname query construction
//!
//! The device search endpoint takes an AQL expression in which hostnames are
//! matched with `regex(...)`. A raw hostname pushed into that expression
//! would have `.`, `*`, `(` and friends interpreted as pattern operators, so
//! every metacharacter is escaped before the expression is assembled. The
//! match is made case-insensitive with the `"i"` flag; the hostname text
//! itself is never re-cased.

use thiserror::Error;

/// Field queried for hostname matches
const HOSTNAME_FIELD: &str = "specific_data.data.hostname";

/// Errors building a hostname query
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Hostname is empty or whitespace-only")]
    EmptyHostname,
}

/// A search expression bound to the hostname it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostQuery {
    hostname: String,
    expression: String,
}

impl HostQuery {
    /// Build a query matching `hostname` literally and case-insensitively.
    ///
    /// Returns [`QueryError::EmptyHostname`] for an empty or whitespace-only
    /// hostname; no expression is built in that case.
    pub fn new(hostname: &str) -> Result<Self, QueryError> {
        let hostname = hostname.trim();
        if hostname.is_empty() {
            return Err(QueryError::EmptyHostname);
        }

        let escaped = escape_pattern(hostname);
        let expression = format!(
            "(\"{}\" == regex(\"{}\", \"i\"))",
            HOSTNAME_FIELD, escaped
        );

        Ok(Self {
            hostname: hostname.to_string(),
            expression,
        })
    }

    /// The hostname the query was derived from (trimmed)
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The assembled search expression
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Escape regex metacharacters plus the quote delimiting the embedded
/// pattern string.
fn escape_pattern(hostname: &str) -> String {
    let escaped = regex::escape(hostname);
    // regex::escape leaves '"' alone, but the pattern sits inside a quoted
    // string in the AQL expression
    escaped.replace('"', "\\\"")
}
