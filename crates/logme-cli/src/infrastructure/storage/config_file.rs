//! `logme.ini` persistence.
//!
//! A project keeps its logging configuration in `<project root>/logme.ini`.
//! [`ConfigStore`] ties a [`ConfigDocument`] to that path: it knows whether the
//! file exists, reads and parses it, and writes it back.
//!
//! Writes replace the whole file.  There is no locking: two `logme`
//! processes editing the same file race and the last writer wins.

use std::io;
use std::path::{Path, PathBuf};

use logme_core::domain::normalize_path;
use logme_core::{
    parse_document, write_document, ConfigDocument, DocumentError, IniError, MigrationError,
};
use thiserror::Error;
use tracing::{debug, info};

/// File name of the configuration inside a project root.
pub const CONFIG_FILE_NAME: &str = "logme.ini";

/// Error type for configuration file operations.
///
/// The messages are printed to the terminal as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The project root does not exist and creating it was not requested.
    #[error(
        "{} does not exist. If you'd like to make the directory, please use '-mk' flag.",
        .path.display()
    )]
    DirectoryNotFound { path: PathBuf },

    /// `init` without override on a project that already has a config file.
    #[error("logme.ini already exists at {}", .path.display())]
    ConfigAlreadyExists { path: PathBuf },

    /// A command that edits the config file found none.
    #[error("logme.ini does not exist at {}. Run 'logme init' first.", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// A file system I/O error occurred.
    #[error("I/O error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid `logme.ini` text.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: IniError,
    },

    /// A document rule was violated (reserved section, bad level, ...).
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The file has legacy content that cannot be upgraded automatically.
    #[error("cannot upgrade {}: {source}", .path.display())]
    Migration {
        path: PathBuf,
        #[source]
        source: MigrationError,
    },
}

// ── Path helpers ──────────────────────────────────────────────────────────────

/// Makes `root` absolute against the process working directory and strips
/// `.` components.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the working directory cannot be read.
pub fn resolve_root(root: &Path) -> Result<PathBuf, StoreError> {
    if root.is_absolute() {
        return Ok(normalize_path(root));
    }
    let cwd = std::env::current_dir().map_err(|source| StoreError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(normalize_path(&cwd.join(root)))
}

/// Path of the config file inside `root`.
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

// ── Load / save ───────────────────────────────────────────────────────────────

/// Reads and parses the document at `path`.
///
/// # Errors
///
/// Returns [`StoreError::ConfigNotFound`] when the file does not exist,
/// [`StoreError::Io`] for other file-system errors, and
/// [`StoreError::Parse`] if the text is malformed.
pub fn load_document(path: &Path) -> Result<ConfigDocument, StoreError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    debug!(path = %path.display(), bytes = text.len(), "read config file");

    parse_document(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `doc` to `path`, truncating any existing file.
///
/// # Errors
///
/// Returns [`StoreError::Io`] for file-system failures.
pub fn save_document(doc: &ConfigDocument, path: &Path) -> Result<(), StoreError> {
    let text = write_document(doc);
    std::fs::write(path, &text).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), sections = doc.len(), "wrote config file");
    Ok(())
}

// ── ConfigStore ───────────────────────────────────────────────────────────────

/// The `logme.ini` of one project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    root: PathBuf,
    path: PathBuf,
}

impl ConfigStore {
    /// Store for `root`, resolved to an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if a relative root cannot be resolved.
    pub fn at_root(root: &Path) -> Result<Self, StoreError> {
        let root = resolve_root(root)?;
        let path = config_file_path(&root);
        Ok(Self { root, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Creates the project root (and parents) if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DirectoryNotFound`] when the root is missing and
    /// `make_dir` is `false`, or [`StoreError::Io`] if creation fails.
    pub fn ensure_root(&self, make_dir: bool) -> Result<(), StoreError> {
        if self.root.is_dir() {
            return Ok(());
        }
        if !make_dir {
            return Err(StoreError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }
        std::fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;
        info!(path = %self.root.display(), "created project directory");
        Ok(())
    }

    /// Loads the existing document.
    ///
    /// # Errors
    ///
    /// See [`load_document`].
    pub fn load(&self) -> Result<ConfigDocument, StoreError> {
        load_document(&self.path)
    }

    /// Replaces the file with `doc`.
    ///
    /// # Errors
    ///
    /// See [`save_document`].
    pub fn save(&self, doc: &ConfigDocument) -> Result<(), StoreError> {
        save_document(doc, &self.path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
