//! Schema detection and upgrade of older `logme.ini` files.
//!
//! # How upgrades work
//!
//! [`steps::MIGRATIONS`] is an ordered list, oldest first.  [`upgrade`] walks
//! it once and applies every migration whose structural check still matches.
//! Because each migration only rewrites the legacy shape it recognizes, an
//! already-current document passes through untouched and the outcome reports
//! `changed() == false`.
//!
//! ```text
//! 1.0 ──add_reserved_sections──► 1.1 ──flatten_formatter──► 1.2 ──rename_handlers──► 1.3
//! ```

pub mod error;
pub mod steps;
pub mod version;

use tracing::debug;

use crate::domain::document::ConfigDocument;

pub use error::MigrationError;
pub use steps::{Migration, MIGRATIONS};
pub use version::SchemaVersion;

/// Result of a successful [`upgrade`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeOutcome {
    /// The document in the current schema.
    pub document: ConfigDocument,
    /// Version detected before any migration ran.
    pub from: SchemaVersion,
    /// Names of the migrations that ran, in order.
    pub applied: Vec<&'static str>,
}

impl UpgradeOutcome {
    /// `true` when at least one migration rewrote the document.
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Infers the schema version from the document's shape.
///
/// Reports the oldest version whose fingerprint is still present, or
/// [`SchemaVersion::CURRENT`] when none is.
pub fn detect_version(doc: &ConfigDocument) -> SchemaVersion {
    MIGRATIONS
        .iter()
        .find(|m| (m.applies)(doc))
        .map(|m| m.from)
        .unwrap_or(SchemaVersion::CURRENT)
}

/// Brings `document` to the current schema.
///
/// # Errors
///
/// Returns [`MigrationError`] when a legacy value cannot be converted without
/// losing or guessing data.  The input document is consumed either way; the
/// caller keeps the file on disk untouched.
pub fn upgrade(mut document: ConfigDocument) -> Result<UpgradeOutcome, MigrationError> {
    let from = detect_version(&document);
    let mut applied = Vec::new();

    for migration in &MIGRATIONS {
        if !(migration.applies)(&document) {
            continue;
        }
        debug!(
            migration = migration.name,
            from = %migration.from,
            to = %migration.to,
            "applying schema migration"
        );
        (migration.apply)(&mut document)?;
        applied.push(migration.name);
    }

    Ok(UpgradeOutcome {
        document,
        from,
        applied,
    })
}
