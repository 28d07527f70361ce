//! Run configuration options

use crate::errors::{ConfigError, ConfigResult};
use serde::Deserialize;
use ward_ir::ErrorMessage;

/// Configuration for a validation run.
///
/// Every field is optional so that partial configurations can be layered:
/// [`Config::merge`] lets the fields set on the override win and passes the
/// rest of the base through.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Locale used to pick messages (default: none)
    pub lang: Option<String>,
    /// Message used when an action or schema has no message of its own
    #[serde(skip)]
    pub message: Option<ErrorMessage>,
    /// Stop at the first issue anywhere in the run (default: false)
    pub abort_early: Option<bool>,
    /// Stop a pipe at its first issue (default: false)
    pub abort_pipe_early: Option<bool>,
}

impl Config {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON.
    ///
    /// Unknown keys and an empty `lang` are rejected so that a broken
    /// configuration fails here rather than during validation.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is malformed or a field is invalid.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> ConfigResult<()> {
        if self.lang.as_deref().is_some_and(|lang| lang.trim().is_empty()) {
            return Err(ConfigError::invalid_field("lang", "must not be empty"));
        }
        Ok(())
    }

    /// Set the locale
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the fallback message
    #[must_use]
    pub fn message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Configure early abort
    #[must_use]
    pub fn abort_early(mut self, abort_early: bool) -> Self {
        self.abort_early = Some(abort_early);
        self
    }

    /// Configure early abort inside pipes
    #[must_use]
    pub fn abort_pipe_early(mut self, abort_pipe_early: bool) -> Self {
        self.abort_pipe_early = Some(abort_pipe_early);
        self
    }

    /// Shallow merge: fields set on `overrides` win, unset ones keep `self`.
    #[must_use]
    pub fn merge(&self, overrides: &Config) -> Config {
        Config {
            lang: overrides.lang.clone().or_else(|| self.lang.clone()),
            message: overrides.message.clone().or_else(|| self.message.clone()),
            abort_early: overrides.abort_early.or(self.abort_early),
            abort_pipe_early: overrides.abort_pipe_early.or(self.abort_pipe_early),
        }
    }

    /// Whether the run stops at its first issue
    #[must_use]
    pub fn aborts_early(&self) -> bool {
        self.abort_early.unwrap_or(false)
    }

    /// Whether pipes stop at their first issue
    #[must_use]
    pub fn aborts_pipe_early(&self) -> bool {
        self.aborts_early() || self.abort_pipe_early.unwrap_or(false)
    }
}
