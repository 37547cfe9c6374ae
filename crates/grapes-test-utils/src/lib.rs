//! Testing utilities for the Grapes translation workspace
//!
//! Shared fixtures and descriptor helpers. [`ProjectFixture`] is one
//! configurable value with named, overridable fields; test variants set
//! the fields they care about instead of subclassing.

#![allow(missing_docs)]

use std::path::PathBuf;

use grapes_translate::{ArtifactDescriptor, DependencyDescriptor, ProjectDescriptor};
use grapes_version::{CatalogResolver, Version};

/// Configurable project fixture
///
/// Defaults to a single-module jar project; override fields for the
/// multi-module, attached-artifact, or dependency-heavy variants.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub project_path: Option<PathBuf>,
    pub main_artifact: Option<ArtifactDescriptor>,
    pub attached: Vec<ArtifactDescriptor>,
    pub dependencies: Vec<DependencyDescriptor>,
    pub sub_modules: Vec<String>,
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self {
            group_id: "org.example.test".to_string(),
            artifact_id: "test-project".to_string(),
            version: "1.0.0-SNAPSHOT".to_string(),
            project_path: None,
            main_artifact: None,
            attached: Vec::new(),
            dependencies: Vec::new(),
            sub_modules: Vec::new(),
        }
    }
}

impl ProjectFixture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_main_artifact(mut self, artifact: ArtifactDescriptor) -> Self {
        self.main_artifact = Some(artifact);
        self
    }

    #[must_use]
    pub fn with_attached(mut self, artifact: ArtifactDescriptor) -> Self {
        self.attached.push(artifact);
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, scope: &str, artifact: ArtifactDescriptor) -> Self {
        self.dependencies
            .push(DependencyDescriptor::new(artifact, scope));
        self
    }

    #[must_use]
    pub fn with_sub_modules(mut self, names: &[&str]) -> Self {
        self.sub_modules = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Materialize the descriptor the translator consumes
    #[must_use]
    pub fn build(&self) -> ProjectDescriptor {
        let mut project =
            ProjectDescriptor::new(&self.group_id, &self.artifact_id, &self.version);
        if let Some(path) = &self.project_path {
            project = project.with_pom_file(path.join("pom.xml"));
        }
        if let Some(main) = &self.main_artifact {
            project = project.with_main_artifact(main.clone());
        }
        for artifact in &self.attached {
            project = project.with_attached_artifact(artifact.clone());
        }
        for dependency in &self.dependencies {
            project = project.with_dependency(dependency.clone());
        }
        for name in &self.sub_modules {
            project = project.with_sub_module(name);
        }
        project
    }
}

/// Jar artifact descriptor with an explicit version
#[must_use]
pub fn jar_descriptor(group: &str, name: &str, version: &str) -> ArtifactDescriptor {
    ArtifactDescriptor::new(group, name, "jar").with_version(version)
}

/// Parse a list of version strings, panicking on invalid fixtures
#[must_use]
pub fn versions(raw: &[&str]) -> Vec<Version> {
    raw.iter()
        .map(|s| s.parse().expect("fixture version must parse"))
        .collect()
}

/// Catalog resolver pre-loaded for one coordinate
#[must_use]
pub fn catalog_for(group: &str, name: &str, available: &[&str]) -> CatalogResolver {
    CatalogResolver::new().with_versions(group, name, versions(available))
}
