//! Normalized artifact record
//!
//! Provides [`Artifact`], the canonical descriptor of a single produced or
//! consumed file. Identity is the coordinate tuple (group, name, version,
//! classifier, packaging type, extension); download URL and size are
//! carried as attributes and do not participate in identity.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Canonical artifact record
///
/// # Invariants
/// - `version` is always present on a constructed value; callers that only
///   hold a range must resolve it first
/// - `extension` is always resolved (handler extension preferred over the
///   raw packaging type)
/// - Immutable after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
    #[serde(rename = "type")]
    packaging: String,
    extension: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<String>,
}

impl Artifact {
    /// Create an artifact from its resolved coordinates
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        classifier: Option<String>,
        packaging: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier,
            packaging: packaging.into(),
            extension: extension.into(),
            download_url: None,
            size: None,
        }
    }

    /// Attach the download URL
    #[inline]
    #[must_use]
    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    /// Attach the byte size
    ///
    /// Stored string-encoded so the reporting format stays free of
    /// numeric-precision ambiguity across platforms.
    #[inline]
    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size.to_string());
        self
    }

    /// Group coordinate
    #[inline]
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Name coordinate
    #[inline]
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Resolved concrete version
    #[inline]
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Classifier, if any
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Declared packaging type (e.g. `jar`, `pom`)
    #[inline]
    #[must_use]
    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    /// Resolved file extension
    #[inline]
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Download URL, if known
    #[inline]
    #[must_use]
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    /// Byte size, string-encoded, if the backing file was readable
    #[inline]
    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Full coordinate string for diagnostics and deduplication
    ///
    /// Format: `group:name:version:classifier:extension` with an empty
    /// classifier segment when absent.
    #[must_use]
    pub fn coordinate(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.group_id,
            self.artifact_id,
            self.version,
            self.classifier.as_deref().unwrap_or(""),
            self.extension
        )
    }
}

// Identity is the coordinate tuple; download URL and size are attributes.
impl PartialEq for Artifact {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.version == other.version
            && self.classifier == other.classifier
            && self.packaging == other.packaging
            && self.extension == other.extension
    }
}

impl Eq for Artifact {}

impl std::hash::Hash for Artifact {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
        self.version.hash(state);
        self.classifier.hash(state);
        self.packaging.hash(state);
        self.extension.hash(state);
    }
}

impl Display for Artifact {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jar() -> Artifact {
        Artifact::new("org.acme", "lib", "1.2.3", None, "jar", "jar")
    }

    #[test]
    fn artifact_coordinate_without_classifier() {
        assert_eq!(jar().coordinate(), "org.acme:lib:1.2.3::jar");
    }

    #[test]
    fn artifact_coordinate_with_classifier() {
        let artifact = Artifact::new(
            "org.acme",
            "lib",
            "1.2.3",
            Some("sources".to_string()),
            "jar",
            "jar",
        );
        assert_eq!(artifact.coordinate(), "org.acme:lib:1.2.3:sources:jar");
    }

    #[test]
    fn artifact_attributes_unset_by_default() {
        let artifact = jar();
        assert!(artifact.download_url().is_none());
        assert!(artifact.size().is_none());
    }

    #[test]
    fn artifact_size_string_encoded() {
        let artifact = jar().with_size(2048);
        assert_eq!(artifact.size(), Some("2048"));
    }

    #[test]
    fn artifact_identity_ignores_attributes() {
        let plain = jar();
        let enriched = jar()
            .with_download_url("https://repo.example/lib-1.2.3.jar")
            .with_size(42);
        assert_eq!(plain, enriched);
    }

    #[test]
    fn artifact_identity_includes_extension() {
        let jar_ext = jar();
        let zip_ext = Artifact::new("org.acme", "lib", "1.2.3", None, "jar", "zip");
        assert_ne!(jar_ext, zip_ext);
    }

    #[test]
    fn artifact_serializes_camel_case_and_skips_absent() {
        let artifact = jar().with_size(7);
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["groupId"], "org.acme");
        assert_eq!(json["artifactId"], "lib");
        assert_eq!(json["type"], "jar");
        assert_eq!(json["size"], "7");
        assert!(json.get("classifier").is_none());
        assert!(json.get("downloadUrl").is_none());
    }
}
