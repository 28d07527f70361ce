//! ULID format check

use crate::ValidationAction;
use regex::Regex;
use std::sync::LazyLock;
use ward_config::{Config, IssueContext, add_issue};
use ward_ir::{Dataset, ErrorMessage, IssueKind, Reference, Requirement, TextInput, Value};

/// Crockford base32, 26 characters, either case
pub static ULID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-hjkmnp-tv-z]{26}$").expect("ULID regex")
});

/// Checks that a string is a ULID
#[derive(Debug, Clone)]
pub struct UlidAction {
    requirement: Regex,
    message: Option<ErrorMessage>,
}

/// Create a ULID action, optionally with its own error message
#[must_use]
pub fn ulid(message: Option<ErrorMessage>) -> UlidAction {
    UlidAction {
        requirement: ULID_REGEX.clone(),
        message,
    }
}

impl UlidAction {
    /// The compiled ULID pattern
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.requirement
    }
}

impl Default for UlidAction {
    fn default() -> Self {
        ulid(None)
    }
}

impl IssueContext for UlidAction {
    fn kind(&self) -> IssueKind {
        IssueKind::Validation
    }

    fn issue_type(&self) -> &'static str {
        "ulid"
    }

    fn reference(&self) -> Reference {
        Reference("ward_actions::ulid")
    }

    fn expects(&self) -> Option<&str> {
        None
    }

    fn requirement(&self) -> Requirement {
        Requirement::Pattern(self.requirement.clone())
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl<T> ValidationAction<T> for UlidAction
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
            add_issue(self, "ULID", &mut dataset, config, None);
        }
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";

    fn check(value: &str) -> Dataset<String> {
        ulid(None).run(Dataset::typed(value.to_string()), &Config::new())
    }

    #[test]
    fn test_valid_ulids_pass() {
        for value in [VALID, "01arz3ndektsv4rrffq69g5fav", "7ZZZZZZZZZZZZZZZZZZZZZZZZZ"] {
            let dataset = check(value);
            assert!(dataset.is_success(), "{value} should be a ULID");
            assert_eq!(dataset.value, value);
        }
    }

    #[test]
    fn test_invalid_ulids_flagged() {
        for value in [
            "",
            "not-a-ulid",
            "01ARZ3NDEKTSV4RRFFQ69G5FA",
            "01ARZ3NDEKTSV4RRFFQ69G5FAVX",
            "01ARZ3NDEKTSV4RRFFQ69G5FAI",
            "01ARZ3NDEKTSV4RRFFQ69G5FAL",
            "01ARZ3NDEKTSV4RRFFQ69G5FAO",
            "01ARZ3NDEKTSV4RRFFQ69G5FAU",
            "01ARZ3NDEKTSV4RRFFQ69G5FA ",
            "01ARZ3NDEKTSV4RRFFQ69G5FA١",
        ] {
            let dataset = check(value);
            assert_eq!(dataset.issues.len(), 1, "{value:?} should be rejected");
            assert!(dataset.typed, "format issues keep the dataset typed");
            assert_eq!(dataset.value, value);
        }
    }

    #[test]
    fn test_issue_shape() {
        let dataset = check("not-a-ulid");
        let issue = &dataset.issues[0];

        assert_eq!(issue.kind, IssueKind::Validation);
        assert_eq!(issue.issue_type, "ulid");
        assert_eq!(issue.expected, None);
        assert_eq!(issue.received, "\"not-a-ulid\"");
        assert_eq!(issue.input, Value::from("not-a-ulid"));
        assert_eq!(issue.requirement, Requirement::Pattern(ULID_REGEX.clone()));
        assert_eq!(issue.message, "Invalid ULID: Received \"not-a-ulid\"");
    }

    #[test]
    fn test_untyped_dataset_skipped() {
        let mut dataset = Dataset::new("not-a-ulid".to_string());
        dataset.typed = false;

        let dataset = ulid(None).run(dataset, &Config::new());
        assert!(dataset.issues.is_empty());
    }

    #[test]
    fn test_non_text_value_ignored() {
        let dataset = ulid(None).run(Dataset::typed(Value::Integer(3)), &Config::new());
        assert!(dataset.issues.is_empty());
    }

    #[test]
    fn test_action_metadata() {
        let action = ulid(Some("bad id".into()));
        assert_eq!(action.kind(), IssueKind::Validation);
        assert_eq!(action.issue_type(), "ulid");
        assert_eq!(action.reference(), Reference("ward_actions::ulid"));
        assert_eq!(action.expects(), None);
        assert_eq!(action.message(), Some(&ErrorMessage::from("bad id")));
        assert!(!ValidationAction::<String>::is_async(&action));
        assert_eq!(action.pattern().as_str(), ULID_REGEX.as_str());
    }
}
