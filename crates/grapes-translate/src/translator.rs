//! Translation from build-tool descriptors to the Grapes data model
//!
//! A stateless set of pure mapping functions: [`module_of`],
//! [`artifact_of`], [`pom_artifact_of`] and [`dependency_of`], composed by
//! [`translate_project`] into a batch that collects per-item failures
//! instead of aborting on the first one.

use std::collections::HashSet;

use grapes_model::{Artifact, DependencyEdge, Module, ModuleId, Scope, UnsupportedScope};
use grapes_version::{RangeResolver, ResolveError, VersionConstraint};

use crate::config::TranslatorConfig;
use crate::descriptor::{ArtifactDescriptor, DependencyDescriptor, ProjectDescriptor};
use crate::error::TranslateError;
use crate::probe;

/// Stable module key for a coordinate pair, format `<group>:<name>`
///
/// Total over its inputs; empty segments pass through unchanged.
#[inline]
#[must_use]
pub fn module_key(group: &str, name: &str) -> String {
    ModuleId::new(group, name).key()
}

/// Derive the module record from a project descriptor
#[inline]
#[must_use]
pub fn module_of(project: &ProjectDescriptor) -> Module {
    let id = ModuleId::new(&project.group_id, &project.artifact_id);
    Module::new(&id, &project.version)
}

/// Normalize a raw artifact descriptor into a canonical [`Artifact`]
///
/// Extension selection prefers the handler-declared extension over the raw
/// packaging type. Version selection prefers the explicit version and
/// falls back to resolving the declared range; with neither, translation
/// fails. The file-size probe never fails normalization: an absent or
/// unreadable file leaves the size unset.
///
/// # Errors
/// [`TranslateError::MissingVersion`] when neither version nor range is
/// declared, [`TranslateError::UnresolvableRange`] when the range cannot
/// be resolved to one concrete version
pub fn artifact_of(
    descriptor: &ArtifactDescriptor,
    resolver: &dyn RangeResolver,
) -> Result<Artifact, TranslateError> {
    let version = select_version(descriptor, resolver)?;
    let extension = descriptor
        .handler_extension
        .clone()
        .unwrap_or_else(|| descriptor.packaging.clone());

    let mut artifact = Artifact::new(
        &descriptor.group_id,
        &descriptor.artifact_id,
        version,
        descriptor.classifier.clone(),
        &descriptor.packaging,
        extension,
    );

    if let Some(url) = &descriptor.download_url {
        artifact = artifact.with_download_url(url);
    }

    if let Some(path) = &descriptor.file {
        match probe::file_size(path) {
            Some(size) => artifact = artifact.with_size(size),
            None => tracing::debug!(
                artifact = %artifact,
                path = %path.display(),
                "artifact file not readable, size left unset"
            ),
        }
    }

    Ok(artifact)
}

/// Map the project descriptor file to a `pom` artifact
///
/// Packaging is fixed to `pom` with extension `xml`; the size comes from
/// the descriptor file when it is readable.
#[must_use]
pub fn pom_artifact_of(project: &ProjectDescriptor) -> Artifact {
    let mut artifact = Artifact::new(
        &project.group_id,
        &project.artifact_id,
        &project.version,
        None,
        "pom",
        "xml",
    );

    if let Some(size) = project.pom_file.as_deref().and_then(probe::file_size) {
        artifact = artifact.with_size(size);
    }

    artifact
}

/// Normalize a raw dependency into a typed [`DependencyEdge`]
///
/// # Errors
/// Everything [`artifact_of`] can fail with, plus
/// [`TranslateError::UnsupportedScope`] when the scope string is outside
/// the closed [`Scope`] set
pub fn dependency_of(
    dependency: &DependencyDescriptor,
    resolver: &dyn RangeResolver,
) -> Result<DependencyEdge, TranslateError> {
    let target = artifact_of(&dependency.artifact, resolver)?;
    let scope: Scope =
        dependency
            .scope
            .parse()
            .map_err(|UnsupportedScope(scope)| TranslateError::UnsupportedScope {
                coordinate: target.coordinate(),
                scope,
            })?;
    Ok(DependencyEdge::new(target, scope))
}

fn select_version(
    descriptor: &ArtifactDescriptor,
    resolver: &dyn RangeResolver,
) -> Result<String, TranslateError> {
    if let Some(version) = &descriptor.version {
        return Ok(version.clone());
    }

    let Some(range) = &descriptor.version_range else {
        return Err(TranslateError::MissingVersion {
            coordinate: descriptor.coordinate(),
        });
    };

    let constraint =
        VersionConstraint::parse(range).map_err(|error| TranslateError::UnresolvableRange {
            coordinate: descriptor.coordinate(),
            source: ResolveError::from(error),
        })?;

    resolver
        .resolve(&descriptor.group_id, &descriptor.artifact_id, &constraint)
        .map(|version| version.as_str().to_string())
        .map_err(|source| TranslateError::UnresolvableRange {
            coordinate: descriptor.coordinate(),
            source,
        })
}

/// Result of translating one project
///
/// Artifacts and dependency edges are deduplicated by identity, in first
/// appearance order. `failures` holds the per-item errors of siblings
/// that did not translate; an empty list means the batch is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationReport {
    pub module: Module,
    pub artifacts: Vec<Artifact>,
    pub dependencies: Vec<DependencyEdge>,
    pub sub_modules: Vec<String>,
    pub failures: Vec<TranslateError>,
}

impl TranslationReport {
    /// Whether every item of the batch translated
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Translate a whole project: module, artifacts, dependencies, sub-modules
///
/// One failing artifact or dependency never aborts its siblings; each
/// failure is collected with its coordinate and translation continues.
#[must_use]
pub fn translate_project(
    project: &ProjectDescriptor,
    resolver: &dyn RangeResolver,
    config: &TranslatorConfig,
) -> TranslationReport {
    let module = module_of(project);
    tracing::debug!(module = %module, "translating project");

    let mut artifacts: Vec<Artifact> = Vec::new();
    let mut seen_artifacts: HashSet<String> = HashSet::new();
    let mut failures: Vec<TranslateError> = Vec::new();

    let mut push_unique = |artifact: Artifact, artifacts: &mut Vec<Artifact>| {
        if seen_artifacts.insert(artifact.coordinate()) {
            artifacts.push(artifact);
        }
    };

    if config.include_pom_artifact {
        push_unique(pom_artifact_of(project), &mut artifacts);
    }

    let attached = config
        .include_attached_artifacts
        .then_some(project.attached_artifacts.as_slice())
        .unwrap_or_default();
    for descriptor in project.main_artifact.iter().chain(attached) {
        match artifact_of(descriptor, resolver) {
            Ok(artifact) => push_unique(artifact, &mut artifacts),
            Err(error) => {
                tracing::warn!(coordinate = error.coordinate(), %error, "artifact skipped");
                failures.push(error);
            }
        }
    }

    let mut dependencies: Vec<DependencyEdge> = Vec::new();
    let mut seen_edges: HashSet<(String, Scope)> = HashSet::new();
    for dependency in &project.dependencies {
        match dependency_of(dependency, resolver) {
            Ok(edge) => {
                if seen_edges.insert((edge.target().coordinate(), edge.scope())) {
                    dependencies.push(edge);
                }
            }
            Err(error) => {
                tracing::warn!(coordinate = error.coordinate(), %error, "dependency skipped");
                failures.push(error);
            }
        }
    }

    let sub_modules = project
        .sub_modules
        .iter()
        .map(|name| module_key(&project.group_id, name))
        .collect();

    tracing::debug!(
        module = %module,
        artifacts = artifacts.len(),
        dependencies = dependencies.len(),
        failures = failures.len(),
        "project translated"
    );

    TranslationReport {
        module,
        artifacts,
        dependencies,
        sub_modules,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grapes_version::CatalogResolver;

    fn no_catalog() -> CatalogResolver {
        CatalogResolver::new()
    }

    fn jar(version: &str) -> ArtifactDescriptor {
        ArtifactDescriptor::new("org.acme", "lib", "jar").with_version(version)
    }

    #[test]
    fn handler_extension_wins_over_packaging() {
        let descriptor = jar("1.0.0").with_handler_extension("so");
        let artifact = artifact_of(&descriptor, &no_catalog()).unwrap();
        assert_eq!(artifact.extension(), "so");
        assert_eq!(artifact.packaging(), "jar");
    }

    #[test]
    fn packaging_is_extension_fallback() {
        let artifact = artifact_of(&jar("1.0.0"), &no_catalog()).unwrap();
        assert_eq!(artifact.extension(), "jar");
    }

    #[test]
    fn missing_version_and_range_fails_typed() {
        let descriptor = ArtifactDescriptor::new("org.acme", "lib", "jar");
        let result = artifact_of(&descriptor, &no_catalog());
        assert_eq!(
            result,
            Err(TranslateError::MissingVersion {
                coordinate: "org.acme:lib:?".to_string()
            })
        );
    }

    #[test]
    fn malformed_range_surfaces_as_unresolvable() {
        let descriptor =
            ArtifactDescriptor::new("org.acme", "lib", "jar").with_version_range("[1.0,2.0");
        let result = artifact_of(&descriptor, &no_catalog());
        assert!(matches!(
            result,
            Err(TranslateError::UnresolvableRange { .. })
        ));
    }

    #[test]
    fn range_resolves_through_catalog() {
        let resolver = CatalogResolver::new().with_versions(
            "org.acme",
            "lib",
            vec![
                "1.0".parse().unwrap(),
                "1.5".parse().unwrap(),
                "1.9".parse().unwrap(),
                "2.0".parse().unwrap(),
            ],
        );
        let descriptor =
            ArtifactDescriptor::new("org.acme", "lib", "jar").with_version_range("[1.0,2.0)");
        let artifact = artifact_of(&descriptor, &resolver).unwrap();
        assert_eq!(artifact.version(), "1.9");
    }

    #[test]
    fn download_url_carried_through() {
        let descriptor = jar("1.0.0").with_download_url("https://repo.example/lib.jar");
        let artifact = artifact_of(&descriptor, &no_catalog()).unwrap();
        assert_eq!(artifact.download_url(), Some("https://repo.example/lib.jar"));
    }

    #[test]
    fn missing_file_leaves_size_unset() {
        let descriptor = jar("1.0.0").with_file("/nonexistent/lib-1.0.0.jar");
        let artifact = artifact_of(&descriptor, &no_catalog()).unwrap();
        assert_eq!(artifact.size(), None);
    }

    #[test]
    fn module_of_uses_group_name_key() {
        let project = ProjectDescriptor::new("org.acme", "app", "2.0.0");
        let module = module_of(&project);
        assert_eq!(module.name(), "org.acme:app");
        assert_eq!(module.version(), "2.0.0");
    }

    #[test]
    fn pom_artifact_is_fixed_pom_xml() {
        let project = ProjectDescriptor::new("org.acme", "app", "2.0.0");
        let artifact = pom_artifact_of(&project);
        assert_eq!(artifact.packaging(), "pom");
        assert_eq!(artifact.extension(), "xml");
        assert_eq!(artifact.classifier(), None);
        assert_eq!(artifact.size(), None);
    }

    #[test]
    fn dependency_with_valid_scope() {
        let dependency = DependencyDescriptor::new(jar("1.0.0"), "compile");
        let edge = dependency_of(&dependency, &no_catalog()).unwrap();
        assert_eq!(edge.scope(), Scope::Compile);
    }

    #[test]
    fn dependency_with_bogus_scope_fails_with_context() {
        let dependency = DependencyDescriptor::new(jar("1.0.0"), "bogus");
        let result = dependency_of(&dependency, &no_catalog());
        assert_eq!(
            result,
            Err(TranslateError::UnsupportedScope {
                coordinate: "org.acme:lib:1.0.0::jar".to_string(),
                scope: "bogus".to_string(),
            })
        );
    }
}
