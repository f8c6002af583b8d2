//! Reading and writing the `logme.ini` text format.

pub mod codec;

pub use codec::{parse_document, write_document, IniError};
