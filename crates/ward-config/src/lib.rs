#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # ward-config
//!
//! Run configuration, process-wide defaults and issue reporting.
//!
//! A [`Config`] travels with every validation run. When a caller does not
//! supply one, the global configuration from [`get_global_config`] is used.
//!
//! ## Example Usage
//!
//! ```rust
//! use ward_config::Config;
//!
//! let caller = Config::new().lang("fr").abort_pipe_early(true);
//! let local = Config::new().lang("de");
//!
//! let effective = caller.merge(&local);
//! assert_eq!(effective.lang.as_deref(), Some("de"));
//! assert_eq!(effective.abort_pipe_early, Some(true));
//! ```

pub mod config;
pub mod errors;
pub mod reporter;
pub mod store;

// Re-export main types
pub use config::Config;
pub use errors::{ConfigError, ConfigResult};
pub use reporter::{IssueContext, IssueOverrides, add_issue, default_message};
pub use store::{
    delete_global_config, delete_global_message, delete_schema_message, delete_specific_message,
    get_global_config, get_global_message, get_schema_message, get_specific_message,
    set_global_config, set_global_message, set_schema_message, set_specific_message,
};

pub use errors::ConfigError as Error;
pub type Result<T> = ConfigResult<T>;
