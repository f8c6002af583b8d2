//! Errors raised by document-level operations.

use thiserror::Error;

use crate::domain::reserved::ReservedSection;

/// Errors that can occur when mutating a [`crate::ConfigDocument`].
///
/// The `Display` text of each variant is shown to the user verbatim by the
/// CLI, so the wording is part of the tool's interface.
#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    /// Attempt to remove `logme` or `colors`.
    #[error("{}", .0.removal_message())]
    ProtectedSection(ReservedSection),

    /// Attempt to add a logger under a reserved name.
    #[error("'{0}' is a reserved section name")]
    ReservedName(ReservedSection),

    /// The name cannot be written as an INI section header.
    #[error("invalid section name: {0:?}")]
    InvalidSectionName(String),

    /// The section to remove is not in the document.
    #[error("'{0}' logger config does not exist")]
    SectionNotFound(String),

    /// The value cannot be written on a single `key = value` line and read
    /// back unchanged.
    #[error("invalid value for '{option}': {value:?} (line breaks and leading or trailing whitespace are not allowed)")]
    InvalidValue { option: &'static str, value: String },

    /// The level is neither a standard severity name nor a number.
    #[error("{0} is not a valid level")]
    InvalidLevel(String),
}
