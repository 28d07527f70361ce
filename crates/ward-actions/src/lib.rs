#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # ward-actions
//!
//! Atomic validation actions and the two pipeline step shapes.
//!
//! Dataset actions implement [`ValidationAction`]: they receive a dataset,
//! may append an issue and hand the dataset back. Legacy steps implement
//! [`PipeStep`] and return a [`ward_ir::PipeResult`]; [`legacy`] adapts them
//! to the dataset shape.
//!
//! ## Example Usage
//!
//! ```rust
//! use ward_actions::{ValidationAction, max_length, ulid};
//! use ward_config::Config;
//! use ward_ir::{Dataset, PipeResult};
//!
//! let dataset = ulid(None).run(Dataset::typed("not-a-ulid"), &Config::new());
//! assert_eq!(dataset.issues[0].received, "\"not-a-ulid\"");
//!
//! let step = max_length(2, None);
//! assert_eq!(step.check("ab"), PipeResult::Output("ab"));
//! assert!(!step.check("abc").is_output());
//! ```

pub mod action;
pub mod legacy;
pub mod length;
pub mod pattern;
pub mod ulid;

// Re-export main types
pub use action::{BoxedAction, ValidationAction, run_all};
pub use legacy::{Legacy, PipeStep, legacy};
pub use length::{DEFAULT_MAX_LENGTH_MESSAGE, MaxLength, max_length};
pub use pattern::{RegexAction, regex};
pub use ulid::{ULID_REGEX, UlidAction, ulid};

use thiserror::Error;

/// Errors raised while building actions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid requirement for {action}: {reason}")]
    InvalidRequirement { action: String, reason: String },
}

impl Error {
    /// Build an invalid-pattern error with the offending source text.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Build an invalid-requirement error for the named action.
    pub fn invalid_requirement(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRequirement {
            action: action.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
