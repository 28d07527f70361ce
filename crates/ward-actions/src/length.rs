//! Maximum length check for strings and lists

use crate::legacy::{Legacy, PipeStep, legacy};
use crate::{Error, Result};
use tracing::debug;
use ward_ir::{ErrorMessage, Issue, IssueKind, PipeResult, Reference, Requirement, SequenceInput, Value};

/// Message reported when no other message is given
pub const DEFAULT_MAX_LENGTH_MESSAGE: &str = "Invalid length";

/// Rejects inputs longer than `requirement`; equal length passes
#[derive(Debug, Clone, PartialEq)]
pub struct MaxLength {
    requirement: usize,
    message: Option<String>,
}

/// Create a maximum length step
#[must_use]
pub fn max_length(requirement: usize, message: Option<&str>) -> MaxLength {
    MaxLength {
        requirement,
        message: message.map(str::to_string),
    }
}

impl MaxLength {
    /// Create a step from a signed bound, as found in loosely typed settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequirement`] when the bound is negative.
    pub fn try_new(requirement: i64, message: Option<&str>) -> Result<Self> {
        let bound = usize::try_from(requirement).map_err(|_| {
            Error::invalid_requirement("max_length", format!("{requirement} is negative"))
        })?;
        debug!(requirement = bound, "Created max_length step");
        Ok(max_length(bound, message))
    }

    /// The inclusive upper bound
    #[must_use]
    pub fn requirement(&self) -> usize {
        self.requirement
    }

    /// The message reported on failure
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MAX_LENGTH_MESSAGE)
    }

    /// Check `input`; inputs without a length pass through
    pub fn check<T>(&self, input: T) -> PipeResult<T>
    where
        T: SequenceInput + Into<Value>,
    {
        match input.length() {
            Some(len) if len > self.requirement => PipeResult::Issues(vec![
                Issue::new(IssueKind::Validation, "max_length", input.into(), len.to_string())
                    .with_expected(format!("<={}", self.requirement))
                    .with_requirement(Requirement::Length(self.requirement))
                    .with_message(self.message()),
            ]),
            _ => PipeResult::Output(input),
        }
    }

    /// Wrap the step for use in a dataset pipeline
    #[must_use]
    pub fn into_action(self) -> Legacy<MaxLength> {
        let requirement = Requirement::Length(self.requirement);
        let message = self.message.clone().map(ErrorMessage::from);
        legacy(self)
            .named("max_length", Reference("ward_actions::max_length"))
            .with_requirement(requirement)
            .with_message(message)
    }
}

impl<T> PipeStep<T> for MaxLength
where
    T: SequenceInput + Into<Value>,
{
    fn apply(&self, input: T) -> PipeResult<T> {
        self.check(input)
    }
}

impl From<MaxLength> for Legacy<MaxLength> {
    fn from(step: MaxLength) -> Self {
        step.into_action()
    }
}
