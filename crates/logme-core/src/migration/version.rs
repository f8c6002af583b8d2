//! Schema versions of `logme.ini`.
//!
//! Files never carry an explicit version tag, so the version is inferred from
//! the shape of the document (see [`crate::migration::detect_version`]).

use std::fmt;

/// A known shape of `logme.ini`, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaVersion {
    /// No `[colors]` section.
    V1_0,
    /// `formatter` written as a nested block with `fmt` / `style`.
    V1_1,
    /// Handler blocks keyed by handler class (`StreamHandler = ...`).
    V1_2,
    /// Current shape.
    V1_3,
}

impl SchemaVersion {
    pub const CURRENT: SchemaVersion = SchemaVersion::V1_3;

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVersion::V1_0 => "1.0",
            SchemaVersion::V1_1 => "1.1",
            SchemaVersion::V1_2 => "1.2",
            SchemaVersion::V1_3 => "1.3",
        }
    }

    pub fn is_current(self) -> bool {
        self == Self::CURRENT
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_are_ordered_oldest_first() {
        assert!(SchemaVersion::V1_0 < SchemaVersion::V1_1);
        assert!(SchemaVersion::V1_2 < SchemaVersion::CURRENT);
    }

    #[test]
    fn test_display_uses_dotted_form() {
        assert_eq!(SchemaVersion::V1_2.to_string(), "1.2");
        assert!(SchemaVersion::V1_3.is_current());
    }
}
