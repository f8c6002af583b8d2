//! Storage infrastructure: `logme.ini` file persistence.
//!
//! The `config_file` sub-module is the only place that touches the file
//! system.  It resolves project roots, reads and parses the file, and writes
//! it back through the deterministic codec in `logme-core`.

pub mod config_file;

pub use config_file::{
    config_file_path, load_document, resolve_root, save_document, ConfigStore, StoreError,
    CONFIG_FILE_NAME,
};
