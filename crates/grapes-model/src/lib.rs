//! Grapes Data Model
//!
//! Normalized, immutable value objects describing a build's
//! module-artifact-dependency graph, ready for the reporting pipeline.
//!
//! # Core Concepts
//!
//! - [`ModuleId`] / [`Module`]: stable `group:name` module identity
//! - [`Artifact`]: canonical artifact record with resolved extension
//! - [`Scope`]: closed enumeration of dependency scopes
//! - [`DependencyEdge`]: artifact + scope pairing
//!
//! # Example
//!
//! ```rust
//! use grapes_model::{Artifact, DependencyEdge, Module, ModuleId, Scope};
//!
//! let module = Module::new(&ModuleId::new("org.acme", "lib"), "1.2.3");
//! let artifact = Artifact::new("org.acme", "lib", "1.2.3", None, "jar", "jar");
//! let edge = DependencyEdge::new(artifact, Scope::Compile);
//!
//! assert_eq!(module.name(), "org.acme:lib");
//! assert_eq!(edge.scope(), Scope::Compile);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod artifact;
mod dependency;
mod module;
mod scope;

// Re-exports
pub use artifact::Artifact;
pub use dependency::DependencyEdge;
pub use module::{Module, ModuleId, ModuleIdError};
pub use scope::{Scope, UnsupportedScope};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn full_model_round_trips_through_json() {
        let module = Module::new(&ModuleId::new("org.acme", "app"), "2.0.0");
        let artifact = Artifact::new(
            "org.acme",
            "app",
            "2.0.0",
            Some("sources".to_string()),
            "jar",
            "jar",
        )
        .with_size(1024);
        let edge = DependencyEdge::new(artifact.clone(), Scope::Compile);

        let module_json = serde_json::to_string(&module).unwrap();
        let decoded: Module = serde_json::from_str(&module_json).unwrap();
        assert_eq!(decoded, module);

        let edge_json = serde_json::to_string(&edge).unwrap();
        let decoded: DependencyEdge = serde_json::from_str(&edge_json).unwrap();
        assert_eq!(decoded.target(), &artifact);
        assert_eq!(decoded.scope(), Scope::Compile);
    }
}
