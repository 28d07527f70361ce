//! Result-returning pipeline steps and their dataset adapter
#![allow(clippy::return_self_not_must_use)] // Fluent setters are designed for chaining.

use crate::ValidationAction;
use tracing::trace;
use ward_config::{Config, IssueContext, get_specific_message};
use ward_ir::{Dataset, ErrorMessage, IssueKind, PipeResult, Reference, Requirement};

/// A step that takes its input by value and returns a [`PipeResult`]
pub trait PipeStep<T>: Send + Sync {
    /// Check `input`, returning it on success
    fn apply(&self, input: T) -> PipeResult<T>;
}

impl<T, F> PipeStep<T> for F
where
    F: Fn(T) -> PipeResult<T> + Send + Sync,
{
    fn apply(&self, input: T) -> PipeResult<T> {
        self(input)
    }
}

/// Runs a [`PipeStep`] as a [`ValidationAction`].
///
/// The step only runs on typed datasets. Its output replaces the dataset
/// value; its issues are appended and the value is kept. Issues without a
/// language take the one from the run's configuration.
///
/// The adapter's own message, or else the specific message registered for its
/// reference, replaces the text the step produced. Config and global messages
/// do not apply: the step's text plays the role of the default message.
pub struct Legacy<S> {
    step: S,
    issue_type: &'static str,
    reference: Reference,
    requirement: Requirement,
    message: Option<ErrorMessage>,
}

/// Wrap a step so it can be placed in a dataset pipeline
pub fn legacy<S>(step: S) -> Legacy<S> {
    Legacy {
        step,
        issue_type: "custom",
        reference: Reference("ward_actions::legacy"),
        requirement: Requirement::None,
        message: None,
    }
}

impl<S> Legacy<S> {
    /// Name the check the step performs
    pub fn named(mut self, issue_type: &'static str, reference: Reference) -> Self {
        self.issue_type = issue_type;
        self.reference = reference;
        self
    }

    /// Record the constraint the step enforces
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Record the message the step reports with
    pub fn with_message(mut self, message: Option<ErrorMessage>) -> Self {
        self.message = message;
        self
    }

    /// The wrapped step
    pub fn step(&self) -> &S {
        &self.step
    }
}

impl<S> IssueContext for Legacy<S> {
    fn kind(&self) -> IssueKind {
        IssueKind::Validation
    }

    fn issue_type(&self) -> &'static str {
        self.issue_type
    }

    fn reference(&self) -> Reference {
        self.reference
    }

    fn expects(&self) -> Option<&str> {
        None
    }

    fn requirement(&self) -> Requirement {
        self.requirement.clone()
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }
}

impl<T, S> ValidationAction<T> for Legacy<S>
where
    T: Clone,
    S: PipeStep<T>,
{
    fn run(&self, dataset: Dataset<T>, config: &Config) -> Dataset<T> {
        if !dataset.typed {
            return dataset;
        }
        let Dataset {
            value,
            typed,
            mut issues,
        } = dataset;
        match self.step.apply(value.clone()) {
            PipeResult::Output(output) => Dataset {
                value: output,
                typed,
                issues,
            },
            PipeResult::Issues(found) => {
                trace!(issue_type = self.issue_type, count = found.len(), "Legacy step failed");
                let message = self
                    .message
                    .clone()
                    .or_else(|| get_specific_message(self.reference, config.lang.as_deref()));
                issues.extend(found.into_iter().map(|issue| {
                    let issue = match issue.lang {
                        Some(_) => issue,
                        None => issue.with_lang(config.lang.clone()),
                    };
                    match &message {
                        Some(message) => {
                            let text = message.render(&issue);
                            issue.with_message(text)
                        }
                        None => issue,
                    }
                }));
                Dataset {
                    value,
                    typed,
                    issues,
                }
            }
        }
    }
}
