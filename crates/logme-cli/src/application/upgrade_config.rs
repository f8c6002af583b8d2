//! UpgradeConfigUseCase: rewrite an older `logme.ini` in the current schema.
//!
//! The file is only written when a migration actually changed something, so
//! running `logme upgrade` on a current file leaves its timestamp alone.

use std::path::{Path, PathBuf};

use logme_core::{upgrade, SchemaVersion};
use tracing::info;

use crate::infrastructure::storage::{ConfigStore, StoreError};
use crate::TOOL_VERSION;

/// Outcome of [`upgrade_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeReport {
    pub path: PathBuf,
    /// Schema detected before upgrading.
    pub from: SchemaVersion,
    /// Names of the migrations that ran.
    pub applied: Vec<&'static str>,
}

impl UpgradeReport {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }

    /// Line printed to the terminal.
    pub fn message(&self) -> String {
        if self.changed() {
            format!("{} has been updated to {}", self.path.display(), TOOL_VERSION)
        } else {
            format!("{} is already up to date ({})", self.path.display(), TOOL_VERSION)
        }
    }
}

/// Upgrades the `logme.ini` in `root` to the current schema.
///
/// # Errors
///
/// - [`StoreError::ConfigNotFound`] if the project has no `logme.ini`.
/// - [`StoreError::Migration`] if legacy content cannot be converted; the
///   file is left untouched.
/// - [`StoreError::Io`] / [`StoreError::Parse`] for unreadable files.
pub fn upgrade_config(root: &Path) -> Result<UpgradeReport, StoreError> {
    let store = ConfigStore::at_root(root)?;
    let document = store.load()?;

    let outcome = upgrade(document).map_err(|source| StoreError::Migration {
        path: store.path().to_path_buf(),
        source,
    })?;

    if outcome.changed() {
        store.save(&outcome.document)?;
        info!(
            path = %store.path().display(),
            from = %outcome.from,
            to = %SchemaVersion::CURRENT,
            "upgraded logme config"
        );
    }

    Ok(UpgradeReport {
        path: store.path().to_path_buf(),
        from: outcome.from,
        applied: outcome.applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(applied: Vec<&'static str>) -> UpgradeReport {
        UpgradeReport {
            path: PathBuf::from("/project/logme.ini"),
            from: SchemaVersion::V1_0,
            applied,
        }
    }

    #[test]
    fn test_message_for_changed_file_names_tool_version() {
        let report = report(vec!["add_reserved_sections"]);
        assert_eq!(
            report.message(),
            format!("{} has been updated to {TOOL_VERSION}", report.path.display())
        );
    }

    #[test]
    fn test_message_for_current_file_says_up_to_date() {
        let report = report(Vec::new());
        assert!(!report.changed());
        assert!(report.message().contains("is already up to date"));
    }
}
