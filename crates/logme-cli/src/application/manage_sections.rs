//! ManageSectionsUseCase: add and remove logger sections.
//!
//! New loggers start as a copy of `[logme]`, so a project's master settings
//! are the template for every logger added afterwards.  Adding a name that
//! already exists resets that logger to the template in place.
//!
//! `[logme]` and `[colors]` are refused by name before the file is even
//! opened: they are required in every file, so there is no state in which
//! removing them would be valid.

use std::path::{Path, PathBuf};

use logme_core::{DocumentError, LoggerOverrides, ReservedSection};
use tracing::{info, warn};

use crate::infrastructure::storage::{ConfigStore, StoreError};

/// What an add or remove changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub path: PathBuf,
    pub name: String,
    /// For adds: `true` when an existing section was reset to defaults.
    pub replaced: bool,
}

/// Adds the logger `name` to the `logme.ini` in `root`.
///
/// # Errors
///
/// - [`StoreError::ConfigNotFound`] if the project has no `logme.ini`.
/// - [`StoreError::Document`] for reserved or unwritable names.
/// - [`StoreError::Io`] / [`StoreError::Parse`] for unreadable files.
pub fn add_section(
    root: &Path,
    name: &str,
    overrides: &LoggerOverrides,
) -> Result<SectionReport, StoreError> {
    let store = ConfigStore::at_root(root)?;
    let mut document = store.load()?;

    let replaced = document.add_logger(name, overrides)?;
    if replaced {
        warn!(section = name, "logger config already existed; reset to defaults");
    }
    store.save(&document)?;

    info!(section = name, path = %store.path().display(), "added logger config");
    Ok(SectionReport {
        path: store.path().to_path_buf(),
        name: name.to_string(),
        replaced,
    })
}

/// Removes the logger `name` from the `logme.ini` in `root`.
///
/// # Errors
///
/// - [`StoreError::Document`] wrapping [`DocumentError::ProtectedSection`]
///   for `logme` and `colors`, or [`DocumentError::SectionNotFound`].
/// - [`StoreError::ConfigNotFound`] if the project has no `logme.ini`.
/// - [`StoreError::Io`] / [`StoreError::Parse`] for unreadable files.
pub fn remove_section(root: &Path, name: &str) -> Result<SectionReport, StoreError> {
    if let Some(reserved) = ReservedSection::from_name(name) {
        return Err(DocumentError::ProtectedSection(reserved).into());
    }

    let store = ConfigStore::at_root(root)?;
    let mut document = store.load()?;
    document.remove_logger(name)?;
    store.save(&document)?;

    info!(section = name, path = %store.path().display(), "removed logger config");
    Ok(SectionReport {
        path: store.path().to_path_buf(),
        name: name.to_string(),
        replaced: false,
    })
}
