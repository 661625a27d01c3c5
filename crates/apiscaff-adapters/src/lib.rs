//! Infrastructure adapters for apiscaff.
//!
//! This crate implements the ports defined in `apiscaff-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_archetype;
pub mod converter;
pub mod filesystem;

// Re-export commonly used adapters
pub use converter::{CommandConverter, DEFAULT_CONVERTER};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
