//! Infrastructure layer: everything that talks to the operating system.

pub mod storage;
