//! Error types for the binding engine.

use thiserror::Error;

use crate::value::OptionKind;

/// Errors raised by the registry, the schema cross-check and the validator.
///
/// Binding and path resolution never fail; a missing value resolves to the
/// kind's zero value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two descriptors in the same table share a name.
    #[error("duplicate option name: {0}")]
    DuplicateOption(&'static str),

    /// A field's accessor kind disagrees with its descriptor.
    #[error("option '{name}' is declared as {declared} but the field holds {field}")]
    KindMismatch {
        /// The option name.
        name: &'static str,
        /// Kind from the option descriptor.
        declared: OptionKind,
        /// Kind of the configuration field.
        field: OptionKind,
    },

    /// A bound value violates a validation rule.
    #[error("{message}")]
    Validation {
        /// Name of the rule that failed.
        rule: &'static str,
        /// Human-readable diagnostic.
        message: String,
    },
}

impl ConfigError {
    /// Creates a validation error for the given rule.
    pub fn validation(rule: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            rule,
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
