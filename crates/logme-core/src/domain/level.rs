//! Logging level values as they are written to `level` options.
//!
//! Users may type a level in any case (`error`, `Error`, `ERROR`) or as a raw
//! number (`50`).  Names are stored in canonical uppercase form; numbers are
//! stored exactly as typed.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DocumentError;

/// A standard severity name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
    NotSet,
}

impl Level {
    /// Canonical uppercase spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::NotSet => "NOTSET",
        }
    }

    /// Parses a level name case-insensitively.  `WARN` and `FATAL` are
    /// accepted as aliases of `WARNING` and `CRITICAL`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "CRITICAL" | "FATAL" => Some(Level::Critical),
            "ERROR" => Some(Level::Error),
            "WARNING" | "WARN" => Some(Level::Warning),
            "INFO" => Some(Level::Info),
            "DEBUG" => Some(Level::Debug),
            "NOTSET" => Some(Level::NotSet),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated value for a `level` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelValue {
    Named(Level),
    /// Digits only, kept verbatim.
    Numeric(String),
}

impl FromStr for LevelValue {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(LevelValue::Numeric(trimmed.to_string()));
        }
        Level::from_name(trimmed)
            .map(LevelValue::Named)
            .ok_or_else(|| DocumentError::InvalidLevel(s.to_string()))
    }
}

impl fmt::Display for LevelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelValue::Named(level) => level.fmt(f),
            LevelValue::Numeric(digits) => f.write_str(digits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(input: &str) -> String {
        input.parse::<LevelValue>().unwrap().to_string()
    }

    #[test]
    fn test_uppercase_name_is_unchanged() {
        assert_eq!(normalize("INFO"), "INFO");
    }

    #[test]
    fn test_lowercase_name_is_uppercased() {
        assert_eq!(normalize("error"), "ERROR");
        assert_eq!(normalize("Debug"), "DEBUG");
    }

    #[test]
    fn test_numeric_string_passes_through() {
        assert_eq!(normalize("50"), "50");
        assert_eq!(normalize("007"), "007");
    }

    #[test]
    fn test_aliases_map_to_canonical_names() {
        assert_eq!(normalize("warn"), "WARNING");
        assert_eq!(normalize("fatal"), "CRITICAL");
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        // Arrange / Act
        let result = "verbose".parse::<LevelValue>();

        // Assert
        assert_eq!(result, Err(DocumentError::InvalidLevel("verbose".to_string())));
    }

    #[test]
    fn test_negative_and_empty_values_are_rejected() {
        assert!("-10".parse::<LevelValue>().is_err());
        assert!("".parse::<LevelValue>().is_err());
    }
}
