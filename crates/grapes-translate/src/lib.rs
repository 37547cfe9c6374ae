//! Grapes Translation Layer
//!
//! Converts a build tool's in-memory project/artifact/dependency
//! representation into the normalized data model the Grapes tracking
//! service consumes.
//!
//! # Core Concepts
//!
//! - [`ProjectDescriptor`] / [`ArtifactDescriptor`] /
//!   [`DependencyDescriptor`]: raw build-tool inputs
//! - [`artifact_of`] / [`dependency_of`] / [`module_of`]: pure mapping
//!   functions into `grapes-model` values
//! - [`translate_project`]: batch translation collecting per-item failures
//! - [`TranslateError`]: typed failure per artifact or dependency
//!
//! # Example
//!
//! ```rust
//! use grapes_translate::{
//!     translate_project, ArtifactDescriptor, DependencyDescriptor, ProjectDescriptor,
//!     TranslatorConfig,
//! };
//! use grapes_version::CatalogResolver;
//!
//! let project = ProjectDescriptor::new("org.acme", "app", "1.0.0").with_dependency(
//!     DependencyDescriptor::new(
//!         ArtifactDescriptor::new("org.acme", "lib", "jar").with_version("2.1.0"),
//!         "compile",
//!     ),
//! );
//!
//! let report = translate_project(&project, &CatalogResolver::new(), &TranslatorConfig::new());
//! assert!(report.is_complete());
//! assert_eq!(report.module.name(), "org.acme:app");
//! assert_eq!(report.dependencies.len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod descriptor;
pub mod error;
pub mod probe;
pub mod translator;

// Re-exports for convenience
pub use config::TranslatorConfig;
pub use descriptor::{ArtifactDescriptor, DependencyDescriptor, ProjectDescriptor};
pub use error::TranslateError;
pub use translator::{
    artifact_of, dependency_of, module_key, module_of, pom_artifact_of, translate_project,
    TranslationReport,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
