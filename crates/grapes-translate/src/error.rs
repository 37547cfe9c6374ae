//! Error types for the translation layer
//!
//! One typed error per failure kind, each carrying the artifact coordinate
//! so callers can produce actionable diagnostics. Every error is terminal
//! for the single item being translated only; batch translation collects
//! failures and continues with siblings.

use grapes_version::ResolveError;

/// Failure translating a single artifact or dependency
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// Neither a concrete version nor a range was declared
    #[error("artifact {coordinate} has no version and no version range")]
    MissingVersion { coordinate: String },

    /// A range was declared but could not be resolved to one version
    #[error("cannot resolve version range for {coordinate}: {source}")]
    UnresolvableRange {
        coordinate: String,
        #[source]
        source: ResolveError,
    },

    /// Declared scope is outside the closed scope enumeration
    #[error("unsupported scope '{scope}' for dependency {coordinate}")]
    UnsupportedScope { coordinate: String, scope: String },
}

impl TranslateError {
    /// Coordinate of the item that failed
    #[inline]
    #[must_use]
    pub fn coordinate(&self) -> &str {
        match self {
            TranslateError::MissingVersion { coordinate }
            | TranslateError::UnresolvableRange { coordinate, .. }
            | TranslateError::UnsupportedScope { coordinate, .. } => coordinate,
        }
    }
}
