//! apiscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the apiscaff
//! API-project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           apiscaff-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, ImportService,        │
//! │  PackageService)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Filesystem, SpecConverter)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    apiscaff-adapters (Infrastructure)   │
//! │ (LocalFilesystem, CommandConverter, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (text transforms, RenderContext,        │
//! │  manifests, DistFile)                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apiscaff_core::prelude::*;
//!
//! let service = ScaffoldService::new(filesystem, WorkspaceLayout::new("."));
//! let name = ProjectName::new("orders")?;
//! service.create_project(&name)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ImportService, PackageReport, PackageService, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, SpecConverter},
    };
    pub use crate::domain::{
        ArchetypeArtifact, Placeholder, ProjectName, RenderContext, WorkspaceLayout,
    };
    pub use crate::error::{ApiscaffError, ApiscaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
