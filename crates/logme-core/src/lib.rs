//! # logme-core
//!
//! Document model, INI codec, and schema migrations for `logme.ini`, the
//! per-project logging configuration file managed by the `logme` tool.
//!
//! This crate never touches the file system.  It turns text into a
//! [`ConfigDocument`], lets callers change it under the file's invariants, and
//! turns it back into text.
//!
//! - **`domain`** – [`ConfigDocument`], sections and nested option values, the
//!   reserved `[colors]` / `[logme]` sections, level normalization, and the
//!   default contents of a fresh file.
//! - **`ini`** – [`parse_document`] and [`write_document`].  Writing is
//!   deterministic, so an unchanged document writes back byte-for-byte.
//! - **`migration`** – [`detect_version`] infers the schema of an older file
//!   from its shape and [`upgrade`] rewrites it to the current one.
//!
//! # Quick start
//!
//! ```rust
//! use logme_core::{default_document, parse_document, write_document, LoggerOverrides};
//!
//! let mut doc = default_document();
//! doc.add_logger("worker", &LoggerOverrides::default()).unwrap();
//!
//! let text = write_document(&doc);
//! assert!(text.starts_with("[colors]\n"));
//! assert_eq!(parse_document(&text).unwrap(), doc);
//! ```

pub mod domain;
pub mod ini;
pub mod migration;

pub use domain::{
    default_document, ConfigDocument, DocumentError, Level, LevelValue, LoggerOverrides,
    NestedValue, OptionValue, ReservedSection, Section, COLOR_SECTION, MASTER_SECTION,
};
pub use ini::{parse_document, write_document, IniError};
pub use migration::{detect_version, upgrade, MigrationError, SchemaVersion, UpgradeOutcome};
