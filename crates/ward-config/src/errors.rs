//! Error types for configuration loading

use thiserror::Error;

/// Errors that can occur when building a configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Malformed configuration document
    #[error("Config parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// Well-formed document with an unusable field value
    #[error("Invalid config field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

impl ConfigError {
    /// Create a parse error at a specific position
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an invalid-field error
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get the line number if available
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } if *line > 0 => Some(*line),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse(e.line(), e.column(), e.to_string())
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
