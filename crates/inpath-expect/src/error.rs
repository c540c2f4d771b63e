//! Error types for expected-row construction.
//!
//! All errors implement `std::error::Error` via `thiserror`.

use inpath_types::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for expected-row operations.
pub type ExpectResult<T> = Result<T, ExpectError>;

/// Errors that can occur while building expected rule rows.
#[derive(Debug, Error)]
pub enum ExpectError {
    /// The rule type tag is not one of the five in-path rule types.
    #[error("Unknown rule type '{type_of_rule}'")]
    UnknownRuleType {
        /// The tag as supplied.
        type_of_rule: String,
    },

    /// A parameter the row cannot be built without is absent.
    #[error("Missing required parameter '{name}'")]
    MissingParameter {
        /// The parameter name.
        name: String,
    },

    /// The parameter bag carries a name no rule type understands.
    #[error("Unknown parameter '{name}'")]
    UnknownParameter {
        /// The parameter name.
        name: String,
    },

    /// A parameter could not be interpreted.
    #[error("Invalid value for parameter '{name}': {message}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A fixture file could not be read.
    #[error("Failed to read fixture file '{}': {source}", .path.display())]
    Fixture {
        /// The fixture path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A YAML fixture could not be parsed.
    #[error("Invalid YAML fixture: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON fixture could not be parsed.
    #[error("Invalid JSON fixture: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExpectError {
    /// Creates an unknown rule type error.
    pub fn unknown_rule_type(type_of_rule: impl Into<String>) -> Self {
        Self::UnknownRuleType {
            type_of_rule: type_of_rule.into(),
        }
    }

    /// Creates a missing parameter error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Creates an unknown parameter error.
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error comes from the rule description itself
    /// rather than from reading or parsing a fixture.
    pub fn is_rule_error(&self) -> bool {
        matches!(
            self,
            ExpectError::UnknownRuleType { .. }
                | ExpectError::MissingParameter { .. }
                | ExpectError::UnknownParameter { .. }
                | ExpectError::InvalidParameter { .. }
        )
    }
}

impl From<ParseError> for ExpectError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnknownRuleType(type_of_rule) => Self::UnknownRuleType { type_of_rule },
        }
    }
}
