//! Application layer for apiscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ImportService,
//!   PackageService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Rendering rules live in `crate::domain`; this layer only sequences
//! reads, renders and writes.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArchetypeReader, ImportService, PackageReport, PackageService, ScaffoldReport,
    ScaffoldService, StagingArea,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SpecConverter};

pub use error::ApplicationError;
