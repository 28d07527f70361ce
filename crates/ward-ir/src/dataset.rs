//! Datasets threaded through validation pipelines

use crate::{Issue, Value};
use serde::Serialize;

/// A value, its typed flag and the issues found so far.
///
/// One dataset is created per top-level validation call and is passed by
/// ownership from step to step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset<T = Value> {
    /// Current value
    pub value: T,

    /// Whether `value` still conforms to the target type
    pub typed: bool,

    /// Issues in detection order
    pub issues: Vec<Issue>,
}

impl<T> Dataset<T> {
    /// Wrap a raw input; not yet typed
    pub fn new(value: T) -> Self {
        Self {
            value,
            typed: false,
            issues: Vec::new(),
        }
    }

    /// Wrap a value already known to conform to its type
    pub fn typed(value: T) -> Self {
        Self {
            value,
            typed: true,
            issues: Vec::new(),
        }
    }

    /// Append an issue
    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Check if any issue was recorded
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Stop later steps from running their type-dependent checks
    pub fn mark_untyped(&mut self) {
        self.typed = false;
    }

    /// Typed with no issues
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.typed && self.issues.is_empty()
    }

    /// Replace the value, keeping flag and issues
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Dataset<U> {
        Dataset {
            value: f(self.value),
            typed: self.typed,
            issues: self.issues,
        }
    }
}

/// Outcome of a legacy pipeline step: the output, or the issues it found
#[derive(Debug, Clone, PartialEq)]
pub enum PipeResult<T> {
    /// Passed; equivalent to `{ typed: true, output }`
    Output(T),
    /// Failed
    Issues(Vec<Issue>),
}

impl<T> PipeResult<T> {
    /// Check if the step passed
    pub fn is_output(&self) -> bool {
        matches!(self, Self::Output(_))
    }

    /// The output, if the step passed
    pub fn output(self) -> Option<T> {
        match self {
            Self::Output(output) => Some(output),
            Self::Issues(_) => None,
        }
    }

    /// The issues, empty if the step passed
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Output(_) => &[],
            Self::Issues(issues) => issues,
        }
    }
}
