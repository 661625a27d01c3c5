//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the three use cases: create a project, import a project, and package
//! its build output.

pub mod archetype_reader;
pub mod import_service;
pub mod package_service;
pub mod scaffold_service;

pub use archetype_reader::ArchetypeReader;
pub use import_service::{ImportService, StagingArea};
pub use package_service::{PackageReport, PackageService};
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
