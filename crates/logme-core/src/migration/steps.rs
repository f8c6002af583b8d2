//! The ordered list of schema migrations.
//!
//! Each migration is a pair of plain functions: a structural check that says
//! whether the document still has the old shape, and a transformation that
//! rewrites it.  Transformations only touch the shapes they recognize, so
//! running one on an already-migrated document changes nothing.

use crate::domain::document::{ConfigDocument, OptionValue, Section};
use crate::domain::reserved::{COLOR_SECTION, MASTER_SECTION};
use crate::domain::templates::{default_color_section, default_master_section, HANDLER_BLOCKS};
use crate::migration::error::MigrationError;
use crate::migration::version::SchemaVersion;

/// One step in the upgrade path.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    /// Version whose shape `applies` recognizes.
    pub from: SchemaVersion,
    /// Version the document has after `apply`.
    pub to: SchemaVersion,
    pub name: &'static str,
    pub applies: fn(&ConfigDocument) -> bool,
    pub apply: fn(&mut ConfigDocument) -> Result<(), MigrationError>,
}

/// All migrations, oldest first.
pub static MIGRATIONS: [Migration; 3] = [
    Migration {
        from: SchemaVersion::V1_0,
        to: SchemaVersion::V1_1,
        name: "add_reserved_sections",
        applies: needs_reserved_sections,
        apply: add_reserved_sections,
    },
    Migration {
        from: SchemaVersion::V1_1,
        to: SchemaVersion::V1_2,
        name: "flatten_formatter",
        applies: has_nested_formatter,
        apply: flatten_formatter,
    },
    Migration {
        from: SchemaVersion::V1_2,
        to: SchemaVersion::V1_3,
        name: "rename_handlers",
        applies: has_legacy_handler_keys,
        apply: rename_handlers,
    },
];

/// Sections that describe loggers (everything except `[colors]`).
fn logger_sections(doc: &ConfigDocument) -> impl Iterator<Item = &Section> {
    doc.sections().filter(|s| s.name() != COLOR_SECTION)
}

fn logger_sections_mut(doc: &mut ConfigDocument) -> impl Iterator<Item = &mut Section> {
    doc.sections_mut().filter(|s| s.name() != COLOR_SECTION)
}

// ── 1.0 → 1.1: reserved sections ──────────────────────────────────────────────

fn needs_reserved_sections(doc: &ConfigDocument) -> bool {
    doc.position(COLOR_SECTION) != Some(0) || !doc.contains_section(MASTER_SECTION)
}

/// Puts `[colors]` first (creating it with defaults if missing) and adds a
/// default `[logme]` right after it if that is missing too.
fn add_reserved_sections(doc: &mut ConfigDocument) -> Result<(), MigrationError> {
    if doc.position(COLOR_SECTION) != Some(0) {
        let colors = doc
            .take_section(COLOR_SECTION)
            .unwrap_or_else(default_color_section);
        doc.insert_section_at(0, colors);
    }
    if !doc.contains_section(MASTER_SECTION) {
        doc.insert_section_at(1, default_master_section());
    }
    Ok(())
}

// ── 1.1 → 1.2: flat formatter strings ─────────────────────────────────────────

const FORMATTER: &str = "formatter";
const FORMATTER_FMT: &str = "fmt";
const FORMATTER_STYLE: &str = "style";
/// The only style the current format string syntax supports.
const BRACE_STYLE: &str = "{";

fn has_nested_formatter(doc: &ConfigDocument) -> bool {
    logger_sections(doc).any(|s| s.get_nested(FORMATTER).is_some())
}

/// Replaces `formatter = \n fmt: ... \n style: {` with `formatter = ...`.
fn flatten_formatter(doc: &mut ConfigDocument) -> Result<(), MigrationError> {
    for section in logger_sections_mut(doc) {
        let Some(nested) = section.get_nested(FORMATTER) else {
            continue;
        };

        let unknown: Vec<&str> = nested
            .keys()
            .filter(|k| *k != FORMATTER_FMT && *k != FORMATTER_STYLE)
            .collect();
        if !unknown.is_empty() {
            return Err(MigrationError::UnknownFormatterKeys {
                section: section.name().to_string(),
                keys: unknown.join(", "),
            });
        }
        if let Some(style) = nested.get(FORMATTER_STYLE) {
            if style != BRACE_STYLE {
                return Err(MigrationError::UnsupportedFormatterStyle {
                    section: section.name().to_string(),
                    style: style.to_string(),
                });
            }
        }
        let fmt = nested
            .get(FORMATTER_FMT)
            .ok_or_else(|| MigrationError::MissingFormatterString {
                section: section.name().to_string(),
            })?
            .to_string();

        section.set(FORMATTER, OptionValue::Plain(fmt));
    }
    Ok(())
}

// ── 1.2 → 1.3: handler block names ────────────────────────────────────────────

fn has_legacy_handler_keys(doc: &ConfigDocument) -> bool {
    logger_sections(doc).any(|s| {
        HANDLER_BLOCKS
            .iter()
            .any(|(_, handler_type)| s.contains(handler_type))
    })
}

/// Renames `StreamHandler` / `FileHandler` / `NullHandler` options to
/// `stream` / `file` / `null`, recording the class as `type`.
fn rename_handlers(doc: &mut ConfigDocument) -> Result<(), MigrationError> {
    for section in logger_sections_mut(doc) {
        for (option, handler_type) in HANDLER_BLOCKS {
            let Some(legacy) = section.get(handler_type) else {
                continue;
            };
            let mut block = legacy
                .as_nested()
                .cloned()
                .ok_or_else(|| MigrationError::UnexpectedShape {
                    section: section.name().to_string(),
                    option: handler_type.to_string(),
                })?;
            block.insert_first("type", handler_type);
            let migrated = OptionValue::Nested(block);

            let conflicts = section.get(option).map(|existing| *existing != migrated);
            match conflicts {
                Some(false) => {
                    section.remove(handler_type);
                }
                Some(true) => {
                    return Err(MigrationError::ConflictingValues {
                        section: section.name().to_string(),
                        legacy: handler_type.to_string(),
                        current: option.to_string(),
                    });
                }
                None => {
                    section.rename(handler_type, option);
                    section.set(option, migrated);
                }
            }
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
