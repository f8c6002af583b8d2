//! InitConfigUseCase: create a fresh `logme.ini` for a project.
//!
//! The new file always holds exactly two sections, `[colors]` followed by
//! `[logme]`.  The caller's overrides (level, formatter, log path) are written
//! into `[logme]`; everything else gets the defaults from `logme-core`.

use std::path::{Path, PathBuf};

use logme_core::{default_document, ConfigDocument, LoggerOverrides, MASTER_SECTION};
use tracing::info;

use crate::infrastructure::storage::{ConfigStore, StoreError};

/// Inputs for [`initialize`].
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Create the project root (and parents) when it is missing.
    pub make_dir: bool,
    /// Replace an existing `logme.ini` instead of failing.
    pub override_existing: bool,
    /// Values written into `[logme]`.
    pub overrides: LoggerOverrides,
}

/// What [`initialize`] wrote.
#[derive(Debug, Clone)]
pub struct InitReport {
    pub path: PathBuf,
    pub document: ConfigDocument,
    /// `true` when an existing file was overwritten.
    pub replaced: bool,
}

/// Writes a new `logme.ini` into `root`.
///
/// # Errors
///
/// - [`StoreError::DirectoryNotFound`] if `root` is missing and
///   `options.make_dir` is `false`.
/// - [`StoreError::ConfigAlreadyExists`] if the file exists and
///   `options.override_existing` is `false`.
/// - [`StoreError::Document`] if an override value cannot be stored; nothing
///   is written.
/// - [`StoreError::Io`] for file-system failures.
pub fn initialize(root: &Path, options: &InitOptions) -> Result<InitReport, StoreError> {
    let store = ConfigStore::at_root(root)?;
    let mut document = default_document();
    if let Some(master) = document.section_mut(MASTER_SECTION) {
        options.overrides.apply(master)?;
    }
    store.ensure_root(options.make_dir)?;

    let replaced = store.exists();
    if replaced && !options.override_existing {
        return Err(StoreError::ConfigAlreadyExists {
            path: store.path().to_path_buf(),
        });
    }

    store.save(&document)?;

    info!(path = %store.path().display(), replaced, "initialized logme config");
    Ok(InitReport {
        path: store.path().to_path_buf(),
        document,
        replaced,
    })
}
