//! Validation issues and error messages
#![allow(clippy::return_self_not_must_use)] // Fluent setters are designed for chaining.

use crate::Value;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Category of the step that produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Base type check performed by a schema
    Schema,
    /// Check performed by a validation action
    Validation,
    /// Failure while transforming a value
    Transformation,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema => write!(f, "schema"),
            Self::Validation => write!(f, "validation"),
            Self::Transformation => write!(f, "transformation"),
        }
    }
}

/// Identity of the constructor that built an action or schema.
///
/// Used for introspection and for looking up locale-specific messages,
/// never for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Reference(pub &'static str);

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The constraint a check was performed against
#[derive(Debug, Clone, Default)]
pub enum Requirement {
    /// No constraint data (base type checks)
    #[default]
    None,
    /// A compiled pattern
    Pattern(Regex),
    /// A length bound
    Length(usize),
}

impl Requirement {
    /// Borrow the pattern, if this requirement is one
    #[must_use]
    pub fn as_pattern(&self) -> Option<&Regex> {
        match self {
            Self::Pattern(re) => Some(re),
            _ => None,
        }
    }
}

// Patterns compare by their source text.
impl PartialEq for Requirement {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::Length(a), Self::Length(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_none(),
            Self::Pattern(re) => serializer.serialize_str(re.as_str()),
            Self::Length(n) => n.serialize(serializer),
        }
    }
}

/// A single validation failure.
///
/// Issues are built once, appended to a dataset and never modified afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// Category discriminator
    pub kind: IssueKind,

    /// The specific check that failed (e.g. `ulid`, `max_length`)
    #[serde(rename = "type")]
    pub issue_type: String,

    /// The value that failed
    pub input: Value,

    /// What was required, when a single expectation exists
    pub expected: Option<String>,

    /// What was actually given
    pub received: String,

    /// The constraint used for the check
    pub requirement: Requirement,

    /// Final human-readable message
    pub message: String,

    /// Locale of the run that produced the issue
    pub lang: Option<String>,
}

impl Issue {
    /// Create a new issue without expectation or requirement data
    pub fn new(
        kind: IssueKind,
        issue_type: impl Into<String>,
        input: Value,
        received: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            issue_type: issue_type.into(),
            input,
            expected: None,
            received: received.into(),
            requirement: Requirement::None,
            message: String::new(),
            lang: None,
        }
    }

    /// Set the expectation
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Set the requirement
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Set the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the locale
    pub fn with_lang(mut self, lang: Option<String>) -> Self {
        self.lang = lang;
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.kind, self.issue_type, self.message)
    }
}

/// Function rendering a message from an otherwise-complete issue
pub type MessageFn = Arc<dyn Fn(&Issue) -> String + Send + Sync>;

/// A user-supplied error message
#[derive(Clone)]
pub enum ErrorMessage {
    /// Fixed text
    Static(String),
    /// Text computed from the issue being reported
    Dynamic(MessageFn),
}

impl ErrorMessage {
    /// Create a message computed from the issue
    pub fn dynamic(render: impl Fn(&Issue) -> String + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(render))
    }

    /// Produce the message text for an issue
    #[must_use]
    pub fn render(&self, issue: &Issue) -> String {
        match self {
            Self::Static(text) => text.clone(),
            Self::Dynamic(render) => render(issue),
        }
    }
}

impl fmt::Debug for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

// Dynamic messages are equal only when they share the same closure.
impl PartialEq for ErrorMessage {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Static(a), Self::Static(b)) => a == b,
            (Self::Dynamic(a), Self::Dynamic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for ErrorMessage {
    fn from(text: &str) -> Self {
        Self::Static(text.to_string())
    }
}

impl From<String> for ErrorMessage {
    fn from(text: String) -> Self {
        Self::Static(text)
    }
}
