//! logme-cli library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.

pub mod application;
pub mod infrastructure;

/// Version printed by `logme -v` and reported by `logme upgrade`.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
