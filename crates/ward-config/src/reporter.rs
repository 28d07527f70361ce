//! Issue reporting shared by actions and schemas

use crate::Config;
use crate::store::{get_global_message, get_schema_message, get_specific_message};
use std::sync::Arc;
use tracing::trace;
use ward_ir::{Dataset, ErrorMessage, Issue, IssueKind, Reference, Requirement, Value};

/// Metadata a step exposes so that its failures can be reported uniformly
pub trait IssueContext {
    /// Schema, validation or transformation
    fn kind(&self) -> IssueKind;

    /// Discriminant of the concrete check (e.g. `ulid`)
    fn issue_type(&self) -> &'static str;

    /// Identity of the constructor that built this step
    fn reference(&self) -> Reference;

    /// Description of the expected input, if there is one
    fn expects(&self) -> Option<&str>;

    /// The constraint the step enforces
    fn requirement(&self) -> Requirement {
        Requirement::None
    }

    /// The user-supplied message override
    fn message(&self) -> Option<&ErrorMessage>;
}

macro_rules! forward_issue_context {
    ($($ty:ty),*) => {$(
        impl<C: IssueContext + ?Sized> IssueContext for $ty {
            fn kind(&self) -> IssueKind {
                (**self).kind()
            }

            fn issue_type(&self) -> &'static str {
                (**self).issue_type()
            }

            fn reference(&self) -> Reference {
                (**self).reference()
            }

            fn expects(&self) -> Option<&str> {
                (**self).expects()
            }

            fn requirement(&self) -> Requirement {
                (**self).requirement()
            }

            fn message(&self) -> Option<&ErrorMessage> {
                (**self).message()
            }
        }
    )*};
}

forward_issue_context!(&C, Box<C>, Arc<C>);

/// Per-call replacements for the fields [`add_issue`] would derive itself
#[derive(Debug, Clone, Default)]
pub struct IssueOverrides {
    /// Offending sub-value instead of the dataset value
    pub input: Option<Value>,
    /// Expectation instead of the context's `expects`
    pub expected: Option<String>,
    /// Rendering instead of [`Value::received`]
    pub received: Option<String>,
    /// Message that beats every other source
    pub message: Option<ErrorMessage>,
}

/// Message used when no other source provides one
#[must_use]
pub fn default_message(label: &str, expected: Option<&str>, received: &str) -> String {
    match expected {
        Some(expected) => format!("Invalid {label}: Expected {expected} but received {received}"),
        None => format!("Invalid {label}: Received {received}"),
    }
}

/// Build an issue for `context` and append it to `dataset`.
///
/// The message is taken from the first source that has one: the overrides,
/// the step's own message, the specific message registered for its reference,
/// the schema message (schema issues only), `config.message`, the global
/// message, and finally [`default_message`]. Schema issues also mark the
/// dataset untyped.
pub fn add_issue<C, T>(
    context: &C,
    label: &str,
    dataset: &mut Dataset<T>,
    config: &Config,
    overrides: Option<IssueOverrides>,
) where
    C: IssueContext + ?Sized,
    T: Clone + Into<Value>,
{
    let overrides = overrides.unwrap_or_default();
    let input = overrides
        .input
        .unwrap_or_else(|| dataset.value.clone().into());
    let expected = overrides
        .expected
        .or_else(|| context.expects().map(str::to_string));
    let received = overrides.received.unwrap_or_else(|| input.received());
    let lang = config.lang.clone();

    let is_schema = context.kind() == IssueKind::Schema;
    let message = overrides
        .message
        .or_else(|| context.message().cloned())
        .or_else(|| get_specific_message(context.reference(), lang.as_deref()))
        .or_else(|| {
            if is_schema {
                get_schema_message(lang.as_deref())
            } else {
                None
            }
        })
        .or_else(|| config.message.clone())
        .or_else(|| get_global_message(lang.as_deref()));

    let mut issue = Issue::new(context.kind(), context.issue_type(), input, received.clone())
        .with_requirement(context.requirement())
        .with_lang(lang)
        .with_message(default_message(label, expected.as_deref(), &received));
    if let Some(expected) = expected {
        issue = issue.with_expected(expected);
    }
    if let Some(message) = message {
        let text = message.render(&issue);
        issue = issue.with_message(text);
    }

    trace!(kind = %issue.kind, issue_type = %issue.issue_type, "Issue reported");
    if is_schema {
        dataset.mark_untyped();
    }
    dataset.add_issue(issue);
}
