//! Application layer: one module per `logme` subcommand.
//!
//! Each use case takes a project root, loads or creates the `logme.ini` there
//! through [`crate::infrastructure::storage::ConfigStore`], changes the
//! document with `logme-core`, and writes it back.

pub mod init_config;
pub mod manage_sections;
pub mod upgrade_config;

pub use init_config::{initialize, InitOptions, InitReport};
pub use manage_sections::{add_section, remove_section, SectionReport};
pub use upgrade_config::{upgrade_config, UpgradeReport};
