//! Default section contents and the overrides users can apply on top of them.

use std::path::{Component, Path, PathBuf};

use crate::domain::document::{ConfigDocument, NestedValue, OptionValue, Section};
use crate::domain::error::DocumentError;
use crate::domain::level::{Level, LevelValue};
use crate::domain::reserved::{COLOR_SECTION, MASTER_SECTION};

/// Default `formatter` for new loggers.
pub const DEFAULT_FORMATTER: &str =
    "{asctime} - {name} - {levelname} - {module}::{funcName}::{message}";

/// Default `file.filename` placeholder.
pub const DEFAULT_LOG_FILENAME: &str = "mylogpath/foo.log";

/// Value that disables coloring for a level in `[colors]`.
pub const NO_COLOR: &str = "None";

/// Handler blocks every logger section carries: `(option, handler type)`.
pub const HANDLER_BLOCKS: [(&str, &str); 3] = [
    ("stream", "StreamHandler"),
    ("file", "FileHandler"),
    ("null", "NullHandler"),
];

/// The `[colors]` section of a fresh document.
pub fn default_color_section() -> Section {
    let mut section = Section::new(COLOR_SECTION);
    section.set(
        "CRITICAL",
        OptionValue::Nested(NestedValue::from_pairs([("color", "PURPLE"), ("style", "BOLD")])),
    );
    section.set("ERROR", OptionValue::plain("RED"));
    section.set("WARNING", OptionValue::plain("YELLOW"));
    section.set("INFO", OptionValue::plain(NO_COLOR));
    section.set("DEBUG", OptionValue::plain("GREEN"));
    section
}

/// The `[logme]` master section of a fresh document.
pub fn default_master_section() -> Section {
    let debug = Level::Debug.as_str();
    let mut section = Section::new(MASTER_SECTION);
    section.set("level", OptionValue::plain(debug));
    section.set("formatter", OptionValue::plain(DEFAULT_FORMATTER));
    section.set(
        "stream",
        OptionValue::Nested(NestedValue::from_pairs([
            ("type", "StreamHandler"),
            ("active", "True"),
            ("level", debug),
        ])),
    );
    section.set(
        "file",
        OptionValue::Nested(NestedValue::from_pairs([
            ("type", "FileHandler"),
            ("active", "False"),
            ("level", debug),
            ("filename", DEFAULT_LOG_FILENAME),
        ])),
    );
    section.set(
        "null",
        OptionValue::Nested(NestedValue::from_pairs([
            ("type", "NullHandler"),
            ("active", "False"),
            ("level", Level::NotSet.as_str()),
        ])),
    );
    section
}

/// A document containing only `[colors]` and `[logme]`, in that order.
pub fn default_document() -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    doc.upsert_section(default_color_section());
    doc.upsert_section(default_master_section());
    doc
}

/// Optional values applied on top of a logger section's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerOverrides {
    /// Replaces `level`.
    pub level: Option<LevelValue>,
    /// Replaces `formatter`.
    pub formatter: Option<String>,
    /// Sets `file.filename` and `file.active = True`.
    pub log_path: Option<PathBuf>,
}

impl LoggerOverrides {
    /// Writes the overrides into `section`.
    ///
    /// Nothing is written unless every value can be stored in the file and
    /// read back unchanged.
    ///
    /// # Errors
    ///
    /// [`DocumentError::InvalidValue`] when the formatter or log path
    /// contains a line break or starts or ends with whitespace.
    pub fn apply(&self, section: &mut Section) -> Result<(), DocumentError> {
        let filename = self
            .log_path
            .as_deref()
            .map(|path| normalize_path(path).to_string_lossy().into_owned());
        if let Some(formatter) = &self.formatter {
            check_value("formatter", formatter)?;
        }
        if let Some(filename) = &filename {
            check_value("filename", filename)?;
        }

        if let Some(level) = &self.level {
            section.set("level", OptionValue::plain(level.to_string()));
        }
        if let Some(formatter) = &self.formatter {
            section.set("formatter", OptionValue::plain(formatter.clone()));
        }
        if let Some(filename) = filename {
            match section.get_mut("file").and_then(OptionValue::as_nested_mut) {
                Some(file) => {
                    file.set("active", "True");
                    file.set("filename", filename);
                }
                None => section.set(
                    "file",
                    OptionValue::Nested(NestedValue::from_pairs([
                        ("type", "FileHandler".to_string()),
                        ("active", "True".to_string()),
                        ("level", Level::Debug.as_str().to_string()),
                        ("filename", filename),
                    ])),
                ),
            }
        }
        Ok(())
    }
}

/// Values are stored as the rest of a single line and trimmed on read.
fn check_value(option: &'static str, value: &str) -> Result<(), DocumentError> {
    if value.contains(['\n', '\r']) || value.trim() != value {
        return Err(DocumentError::InvalidValue {
            option,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Cleans a path lexically: drops `.` components and repeated separators
/// and uses the platform separator.  Absolute paths stay absolute, relative
/// paths stay relative, and `..` is kept because it cannot be resolved
/// without touching the file system.
pub fn normalize_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
