//! The two section names with special meaning in every `logme.ini`.

use std::fmt;

/// Name of the master configuration section.
pub const MASTER_SECTION: &str = "logme";

/// Name of the color configuration section.
pub const COLOR_SECTION: &str = "colors";

/// A section that exists in every initialized document and cannot be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedSection {
    /// `[logme]`: the master logger settings, used as the template for new loggers.
    Logme,
    /// `[colors]`: per-level console colors.
    Colors,
}

impl ReservedSection {
    /// Every reserved section, in the order they appear in a fresh document.
    pub const ALL: [ReservedSection; 2] = [ReservedSection::Colors, ReservedSection::Logme];

    /// Returns the reserved section with this exact name, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            MASTER_SECTION => Some(Self::Logme),
            COLOR_SECTION => Some(Self::Colors),
            _ => None,
        }
    }

    /// The section header name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Logme => MASTER_SECTION,
            Self::Colors => COLOR_SECTION,
        }
    }

    /// User-facing message for an attempted removal.
    pub fn removal_message(self) -> &'static str {
        match self {
            Self::Logme => "'logme' master configuration cannot be removed!",
            Self::Colors => {
                "'colors' configuration cannot be removed! To remove color logging, \
                 set all color values to 'None'"
            }
        }
    }
}

impl fmt::Display for ReservedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_matches_only_exact_names() {
        assert_eq!(ReservedSection::from_name("logme"), Some(ReservedSection::Logme));
        assert_eq!(ReservedSection::from_name("colors"), Some(ReservedSection::Colors));
        assert_eq!(ReservedSection::from_name("Logme"), None);
        assert_eq!(ReservedSection::from_name("blah"), None);
    }

    #[test]
    fn test_removal_messages_are_exact() {
        assert_eq!(
            ReservedSection::Logme.removal_message(),
            "'logme' master configuration cannot be removed!"
        );
        assert_eq!(
            ReservedSection::Colors.removal_message(),
            "'colors' configuration cannot be removed! To remove color logging, set all color \
             values to 'None'"
        );
    }

    #[test]
    fn test_all_lists_colors_first() {
        assert_eq!(ReservedSection::ALL[0], ReservedSection::Colors);
    }
}
