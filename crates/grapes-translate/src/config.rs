//! Translator configuration

use serde::{Deserialize, Serialize};

/// Configuration of batch translation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorConfig {
    /// Report attached artifacts in addition to the main one
    pub include_attached_artifacts: bool,
    /// Report the project descriptor file as a `pom` artifact
    pub include_pom_artifact: bool,
}

impl TranslatorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With attached-artifact reporting toggled
    #[inline]
    #[must_use]
    pub fn with_attached_artifacts(mut self, include: bool) -> Self {
        self.include_attached_artifacts = include;
        self
    }

    /// With pom-artifact reporting toggled
    #[inline]
    #[must_use]
    pub fn with_pom_artifact(mut self, include: bool) -> Self {
        self.include_pom_artifact = include;
        self
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            include_attached_artifacts: true,
            include_pom_artifact: true,
        }
    }
}
