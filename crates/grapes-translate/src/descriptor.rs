//! Raw build-tool descriptors
//!
//! The untyped shapes handed in by the build tool before normalization:
//! [`ProjectDescriptor`], [`ArtifactDescriptor`] and
//! [`DependencyDescriptor`]. Versions may be absent or ranges, classifiers
//! optional, scopes unvalidated strings.

use std::path::PathBuf;

/// Raw artifact descriptor as the build tool reports it
///
/// `version` and `version_range` are both optional; the normalizer
/// requires at least one. `handler_extension` is the extension a
/// packaging handler declared for the type, when one is registered.
#[derive(Debug, Clone)]
pub struct ArtifactDescriptor {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub version_range: Option<String>,
    pub classifier: Option<String>,
    pub packaging: String,
    pub handler_extension: Option<String>,
    pub download_url: Option<String>,
    pub file: Option<PathBuf>,
}

impl ArtifactDescriptor {
    /// Descriptor with only coordinates and packaging type set
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        packaging: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            version_range: None,
            classifier: None,
            packaging: packaging.into(),
            handler_extension: None,
            download_url: None,
            file: None,
        }
    }

    /// With an explicit concrete version
    #[inline]
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// With an unresolved version range
    #[inline]
    #[must_use]
    pub fn with_version_range(mut self, range: impl Into<String>) -> Self {
        self.version_range = Some(range.into());
        self
    }

    /// With a classifier
    #[inline]
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// With a handler-declared extension
    #[inline]
    #[must_use]
    pub fn with_handler_extension(mut self, extension: impl Into<String>) -> Self {
        self.handler_extension = Some(extension.into());
        self
    }

    /// With a download URL
    #[inline]
    #[must_use]
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    /// With a backing file path
    #[inline]
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Coordinate string for diagnostics before normalization
    ///
    /// Uses the explicit version, the raw range, or `?` when neither is
    /// present.
    #[must_use]
    pub fn coordinate(&self) -> String {
        let version = self
            .version
            .as_deref()
            .or(self.version_range.as_deref())
            .unwrap_or("?");
        format!("{}:{}:{}", self.group_id, self.artifact_id, version)
    }
}

/// Raw dependency: an artifact descriptor plus an unvalidated scope string
#[derive(Debug, Clone)]
pub struct DependencyDescriptor {
    pub artifact: ArtifactDescriptor,
    pub scope: String,
}

impl DependencyDescriptor {
    /// Pair an artifact descriptor with its declared scope
    #[inline]
    #[must_use]
    pub fn new(artifact: ArtifactDescriptor, scope: impl Into<String>) -> Self {
        Self {
            artifact,
            scope: scope.into(),
        }
    }
}

/// Raw project descriptor as the build tool reports it
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub pom_file: Option<PathBuf>,
    pub main_artifact: Option<ArtifactDescriptor>,
    pub attached_artifacts: Vec<ArtifactDescriptor>,
    pub dependencies: Vec<DependencyDescriptor>,
    pub sub_modules: Vec<String>,
}

impl ProjectDescriptor {
    /// Project with coordinates only
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            pom_file: None,
            main_artifact: None,
            attached_artifacts: Vec::new(),
            dependencies: Vec::new(),
            sub_modules: Vec::new(),
        }
    }

    /// With the project descriptor file
    #[inline]
    #[must_use]
    pub fn with_pom_file(mut self, pom: impl Into<PathBuf>) -> Self {
        self.pom_file = Some(pom.into());
        self
    }

    /// With the main produced artifact
    #[inline]
    #[must_use]
    pub fn with_main_artifact(mut self, artifact: ArtifactDescriptor) -> Self {
        self.main_artifact = Some(artifact);
        self
    }

    /// With an additional attached artifact
    #[inline]
    #[must_use]
    pub fn with_attached_artifact(mut self, artifact: ArtifactDescriptor) -> Self {
        self.attached_artifacts.push(artifact);
        self
    }

    /// With an additional declared dependency
    #[inline]
    #[must_use]
    pub fn with_dependency(mut self, dependency: DependencyDescriptor) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// With an additional sub-module name
    #[inline]
    #[must_use]
    pub fn with_sub_module(mut self, name: impl Into<String>) -> Self {
        self.sub_modules.push(name.into());
        self
    }
}
