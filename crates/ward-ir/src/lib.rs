#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # ward-ir
//!
//! Shared vocabulary for ward validation: dynamic values, issues, datasets
//! and the legacy pipe result.
//!
//! Every action and schema reads a [`Dataset`], may append [`Issue`]s to it
//! and hands it on to the next step.

/// Datasets and legacy step results.
pub mod dataset;
/// Input views used by actions.
pub mod input;
/// Issues, requirements and error messages.
pub mod issue;
/// Dynamic value model.
pub mod value;

pub use dataset::{Dataset, PipeResult};
pub use input::{SequenceInput, TextInput};
pub use issue::{ErrorMessage, Issue, IssueKind, MessageFn, Reference, Requirement};
pub use value::Value;

use thiserror::Error;

/// Errors that can occur when working with values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

impl Error {
    /// Build a type-mismatch error from the expected type and the offending value.
    pub fn type_mismatch(expected: impl Into<String>, found: &Value) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.received(),
        }
    }
}

/// Crate-local result type for value operations.
pub type Result<T> = std::result::Result<T, Error>;

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", &other)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(Error::type_mismatch("Array", &other)),
        }
    }
}
