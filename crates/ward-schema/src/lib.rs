#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # ward-schema
//!
//! Schemas, pipes and the configuration wrapper.
//!
//! A [`Schema`] narrows a raw [`ward_ir::Value`]; a [`Pipe`] runs a schema and
//! then a list of actions; [`configure`] fixes configuration overrides for a
//! schema. [`safe_parse`] and [`parse`] are the entry points.
//!
//! ## Example Usage
//!
//! ```rust
//! use ward_actions::{max_length, ulid};
//! use ward_config::Config;
//! use ward_schema::{configure, pipe, safe_parse, string};
//!
//! let schema = pipe(string(None), vec![Box::new(max_length(26, None).into_action())])
//!     .with_action(ulid(None));
//! let schema = configure(schema, Config::new().lang("en"));
//!
//! let result = safe_parse(&schema, "01ARZ3NDEKTSV4RRFFQ69G5FAV", None);
//! assert!(result.success);
//!
//! let result = safe_parse(&schema, "not-a-ulid", None);
//! assert_eq!(result.issues[0].issue_type, "ulid");
//! ```

pub mod array;
pub mod configure;
pub mod parse;
pub mod pipe;
pub mod schema;
pub mod string;

// Re-export main types
pub use array::{ArraySchema, array};
pub use configure::{Configured, configure};
pub use parse::{SafeParseResult, parse, safe_parse};
pub use pipe::{Pipe, pipe};
pub use schema::Schema;
pub use string::{StringSchema, string};

use thiserror::Error;
use ward_ir::Issue;

/// Errors returned by [`parse`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{}", first_message(.issues))]
    Validation { issues: Vec<Issue> },
}

impl Error {
    /// Build a validation error from the issues that caused it.
    pub fn validation(issues: Vec<Issue>) -> Self {
        Self::Validation { issues }
    }

    /// The issues behind the error
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Validation { issues } => issues,
        }
    }
}

fn first_message(issues: &[Issue]) -> &str {
    issues
        .first()
        .map_or("Validation failed", |issue| issue.message.as_str())
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use ward_ir::{IssueKind, Value};

    #[test]
    fn test_error_display_uses_first_issue() {
        let issues = vec![
            Issue::new(IssueKind::Validation, "ulid", Value::from("x"), "\"x\"").with_message("first"),
            Issue::new(IssueKind::Validation, "regex", Value::from("x"), "\"x\"").with_message("second"),
        ];
        let err = Error::validation(issues);
        assert_eq!(err.to_string(), "first");
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_error_display_without_issues() {
        assert_eq!(Error::validation(Vec::new()).to_string(), "Validation failed");
    }
}
