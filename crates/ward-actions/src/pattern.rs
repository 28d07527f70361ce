//! General pattern check

use crate::{Error, Result, ValidationAction};
use regex::Regex;
use tracing::debug;
use ward_config::{Config, IssueContext, add_issue};
use ward_ir::{Dataset, ErrorMessage, IssueKind, Reference, Requirement, TextInput, Value};

/// Checks that a string matches a caller-supplied pattern
#[derive(Debug, Clone)]
pub struct RegexAction {
    requirement: Regex,
    expects: String,
    message: Option<ErrorMessage>,
}

/// Compile `pattern` into a regex action.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] when the pattern does not compile.
pub fn regex(pattern: &str, message: Option<ErrorMessage>) -> Result<RegexAction> {
    let requirement =
        Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e.to_string()))?;
    debug!(pattern, "Compiled regex action");
    Ok(RegexAction::from_regex(requirement, message))
}

impl RegexAction {
    /// Build from an already compiled pattern
    #[must_use]
    pub fn from_regex(requirement: Regex, message: Option<ErrorMessage>) -> Self {
        Self {
            expects: format!("/{}/", requirement.as_str()),
            requirement,
            message,
        }
    }

    /// The compiled pattern
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.requirement
    }
}

impl IssueContext for RegexAction {
    fn kind(&self) -> IssueKind {
        IssueKind::Validation
    }

    fn issue_type(&self) -> &'static str {
        "regex"
    }

    fn reference(&self) -> Reference {
        Reference("ward_actions::regex")
    }

    fn expects(&self) -> Option<&str> {
        Some(&self.expects)
    }

    fn requirement(&self) -> Requirement {
        Requirement::Pattern(self.requirement.clone())
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl<T> ValidationAction<T> for RegexAction
where
    T: TextInput + Clone + Into<Value>,
{
    fn run(&self, mut dataset: Dataset<T>, config: &Config) -> Dataset<T> {
        let invalid = dataset.typed
            && dataset
                .value
                .as_text()
                .is_some_and(|text| !self.requirement.is_match(text));
        if invalid {
            add_issue(self, "format", &mut dataset, config, None);
        }
        dataset
    }
}
