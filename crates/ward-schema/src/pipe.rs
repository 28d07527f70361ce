//! Schema followed by an ordered list of actions
#![allow(clippy::return_self_not_must_use)] // Fluent setters are designed for chaining.

use crate::schema::{Schema, with_config};
use std::fmt;
use tracing::trace;
use ward_actions::{BoxedAction, ValidationAction};
use ward_config::{Config, IssueContext};
use ward_ir::{Dataset, IssueKind, Value};

/// Runs `schema`, then each action in order.
///
/// Actions stop running once the dataset is untyped. When issues are present
/// and the configuration aborts early (or aborts the pipe early), the
/// remaining actions are skipped and the typed flag is left unchanged.
pub struct Pipe<S> {
    schema: S,
    actions: Vec<BoxedAction<Value>>,
}

/// Create a pipe over `schema`
pub fn pipe<S: Schema>(schema: S, actions: Vec<BoxedAction<Value>>) -> Pipe<S> {
    Pipe { schema, actions }
}

impl<S> Pipe<S> {
    /// Append an action to the end of the pipe
    pub fn with_action(mut self, action: impl ValidationAction<Value> + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// The leading schema
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// The actions in run order
    pub fn actions(&self) -> &[BoxedAction<Value>] {
        &self.actions
    }
}

impl<S: fmt::Debug> fmt::Debug for Pipe<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actions: Vec<&str> = self.actions.iter().map(|a| a.issue_type()).collect();
        f.debug_struct("Pipe")
            .field("schema", &self.schema)
            .field("actions", &actions)
            .finish()
    }
}

impl<S: Schema> Schema for Pipe<S> {
    fn kind(&self) -> IssueKind {
        self.schema.kind()
    }

    fn schema_type(&self) -> &'static str {
        self.schema.schema_type()
    }

    fn expects(&self) -> &str {
        self.schema.expects()
    }

    fn is_async(&self) -> bool {
        self.schema.is_async() || self.actions.iter().any(|a| a.is_async())
    }

    fn validate(&self, dataset: Dataset, config: Option<&Config>) -> Dataset {
        with_config(config, |config| {
            let mut dataset = self.schema.validate(dataset, Some(config));
            for action in &self.actions {
                if !dataset.typed {
                    break;
                }
                if dataset.has_issues() && config.aborts_pipe_early() {
                    trace!("Aborting pipe early");
                    break;
                }
                trace!(action = action.issue_type(), "Running pipe action");
                dataset = action.run(dataset, config);
            }
            dataset
        })
    }
}
