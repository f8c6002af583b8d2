//! Document model for `logme.ini`.
//!
//! Everything here is plain data and pure functions: no file I/O, no
//! environment lookups.  The CLI crate decides where documents live on disk.

pub mod document;
pub mod error;
pub mod level;
pub mod reserved;
pub mod templates;

pub use document::{validate_section_name, ConfigDocument, NestedValue, OptionValue, Section};
pub use error::DocumentError;
pub use level::{Level, LevelValue};
pub use reserved::{ReservedSection, COLOR_SECTION, MASTER_SECTION};
pub use templates::{
    default_color_section, default_document, default_master_section, normalize_path,
    LoggerOverrides, DEFAULT_FORMATTER, HANDLER_BLOCKS, NO_COLOR,
};
