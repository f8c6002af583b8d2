//! Errors raised while upgrading a legacy document.

use thiserror::Error;

/// A legacy document that cannot be upgraded without guessing.
#[derive(Debug, Error, PartialEq)]
pub enum MigrationError {
    /// The legacy formatter uses a placeholder style other than `{`.
    #[error("[{section}] formatter uses style {style:?}; only '{{' formatters can be upgraded")]
    UnsupportedFormatterStyle { section: String, style: String },

    /// The legacy formatter block has keys besides `fmt` and `style`.
    #[error("[{section}] formatter has unrecognized keys ({keys}) that would be lost")]
    UnknownFormatterKeys { section: String, keys: String },

    /// The legacy formatter block has no `fmt` entry.
    #[error("[{section}] formatter has no 'fmt' entry")]
    MissingFormatterString { section: String },

    /// Both the legacy and the current option are present with different values.
    #[error("[{section}] has both '{legacy}' and '{current}' with different values")]
    ConflictingValues {
        section: String,
        legacy: String,
        current: String,
    },

    /// A legacy option has a shape no migration knows how to convert.
    #[error("[{section}] option '{option}' has an unexpected shape")]
    UnexpectedShape { section: String, option: String },
}
