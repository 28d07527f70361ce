//! Top-level validation entry points

use crate::schema::Schema;
use crate::{Error, Result};
use serde::Serialize;
use tracing::debug;
use ward_config::Config;
use ward_ir::{Dataset, Issue, Value};

/// Outcome of [`safe_parse`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafeParseResult {
    /// Whether the output conforms to the schema's type
    pub typed: bool,
    /// Typed and free of issues
    pub success: bool,
    /// The validated value
    pub output: Value,
    /// Issues in detection order
    pub issues: Vec<Issue>,
}

impl From<Dataset> for SafeParseResult {
    fn from(dataset: Dataset) -> Self {
        Self {
            typed: dataset.typed,
            success: dataset.is_success(),
            output: dataset.value,
            issues: dataset.issues,
        }
    }
}

/// Validate `input` and report the outcome without failing
pub fn safe_parse<S>(schema: &S, input: impl Into<Value>, config: Option<&Config>) -> SafeParseResult
where
    S: Schema + ?Sized,
{
    let dataset = schema.validate(Dataset::new(input.into()), config);
    SafeParseResult::from(dataset)
}

/// Validate `input` and return the output.
///
/// # Errors
///
/// Returns [`Error::Validation`] with every issue found when the input does
/// not conform.
pub fn parse<S>(schema: &S, input: impl Into<Value>, config: Option<&Config>) -> Result<Value>
where
    S: Schema + ?Sized,
{
    let result = safe_parse(schema, input, config);
    if result.success {
        Ok(result.output)
    } else {
        debug!(
            schema = schema.schema_type(),
            issues = result.issues.len(),
            "Validation failed"
        );
        Err(Error::validation(result.issues))
    }
}
