//! String schema

use crate::schema::{Schema, with_config};
use ward_config::{Config, IssueContext, add_issue};
use ward_ir::{Dataset, ErrorMessage, IssueKind, Reference, Value};

/// Accepts string values
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    message: Option<ErrorMessage>,
}

/// Create a string schema, optionally with its own error message
#[must_use]
pub fn string(message: Option<ErrorMessage>) -> StringSchema {
    StringSchema { message }
}

impl IssueContext for StringSchema {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn issue_type(&self) -> &'static str {
        "string"
    }

    fn reference(&self) -> Reference {
        Reference("ward_schema::string")
    }

    fn expects(&self) -> Option<&str> {
        Some("string")
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl Schema for StringSchema {
    fn schema_type(&self) -> &'static str {
        "string"
    }

    fn expects(&self) -> &str {
        "string"
    }

    fn validate(&self, mut dataset: Dataset, config: Option<&Config>) -> Dataset {
        if matches!(dataset.value, Value::String(_)) {
            dataset.typed = true;
        } else {
            with_config(config, |config| add_issue(self, "type", &mut dataset, config, None));
        }
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_string() {
        let dataset = string(None).validate(Dataset::new(Value::from("abc")), Some(&Config::new()));
        assert!(dataset.is_success());
        assert_eq!(dataset.value, Value::from("abc"));
    }

    #[test]
    fn test_rejects_other_values() {
        let config = Config::new();
        for value in [Value::Null, Value::Bool(true), Value::Integer(5), Value::from(vec!["a"])] {
            let dataset = string(None).validate(Dataset::new(value.clone()), Some(&config));
            assert!(!dataset.typed);
            assert_eq!(dataset.issues.len(), 1);
            assert_eq!(dataset.issues[0].kind, IssueKind::Schema);
            assert_eq!(dataset.issues[0].expected.as_deref(), Some("string"));
            assert_eq!(dataset.issues[0].input, value);
        }
    }

    #[test]
    fn test_own_message() {
        let schema = string(Some(ErrorMessage::from("text please")));
        let dataset = schema.validate(Dataset::new(Value::Integer(1)), Some(&Config::new()));
        assert_eq!(dataset.issues[0].message, "text please");
    }
}
