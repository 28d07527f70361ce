//! Array schema

use crate::schema::{Schema, with_config};
use std::mem;
use tracing::trace;
use ward_config::{Config, IssueContext, add_issue};
use ward_ir::{Dataset, ErrorMessage, IssueKind, Reference, Value};

/// Accepts arrays whose items all pass `item`
#[derive(Debug, Clone)]
pub struct ArraySchema<S> {
    item: S,
    message: Option<ErrorMessage>,
}

/// Create an array schema over `item`
#[must_use]
pub fn array<S: Schema>(item: S, message: Option<ErrorMessage>) -> ArraySchema<S> {
    ArraySchema { item, message }
}

impl<S> ArraySchema<S> {
    /// The item schema
    pub fn item(&self) -> &S {
        &self.item
    }
}

impl<S> IssueContext for ArraySchema<S> {
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    fn issue_type(&self) -> &'static str {
        "array"
    }

    fn reference(&self) -> Reference {
        Reference("ward_schema::array")
    }

    fn expects(&self) -> Option<&str> {
        Some("Array")
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl<S: Schema> ArraySchema<S> {
    fn validate_items(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        if !matches!(dataset.value, Value::Array(_)) {
            add_issue(self, "type", &mut dataset, config, None);
            return dataset;
        }
        let Value::Array(items) = mem::replace(&mut dataset.value, Value::Null) else {
            return dataset;
        };

        dataset.typed = true;
        let mut output = Vec::with_capacity(items.len());
        let mut items = items.into_iter();
        for (index, item) in items.by_ref().enumerate() {
            let checked = self.item.validate(Dataset::new(item), Some(config));
            if !checked.typed {
                dataset.typed = false;
            }
            let failed = checked.has_issues();
            dataset.issues.extend(checked.issues);
            output.push(checked.value);

            if failed && config.aborts_early() {
                trace!(index, "Aborting array validation early");
                dataset.typed = false;
                break;
            }
        }
        output.extend(items);
        dataset.value = Value::Array(output);
        dataset
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    fn schema_type(&self) -> &'static str {
        "array"
    }

    fn expects(&self) -> &str {
        "Array"
    }

    fn validate(&self, dataset: Dataset, config: Option<&Config>) -> Dataset {
        with_config(config, |config| self.validate_items(dataset, config))
    }
}
