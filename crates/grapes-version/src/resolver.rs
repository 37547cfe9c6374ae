//! Range resolution
//!
//! Provides the [`RangeResolver`] seam the translation layer calls when a
//! descriptor declares a range instead of a concrete version, plus
//! [`CatalogResolver`], the default implementation over known available
//! versions.

use std::collections::HashMap;

use crate::range::{RangeError, VersionConstraint};
use crate::version::Version;

/// Resolves a version requirement to exactly one concrete version
///
/// Implementations must be deterministic: repeated calls with identical
/// input return identical output.
pub trait RangeResolver {
    /// Select the concrete version for `constraint` on the given coordinate
    ///
    /// # Errors
    /// Returns [`ResolveError`] when no version can be selected
    fn resolve(
        &self,
        group: &str,
        name: &str,
        constraint: &VersionConstraint,
    ) -> Result<Version, ResolveError>;
}

/// Resolver backed by a catalog of known available versions
///
/// Selection policy: the highest catalog version satisfying the
/// constraint. Coordinates absent from the catalog fall back to the
/// constraint's inclusive upper bound when one exists; otherwise
/// resolution fails.
#[derive(Debug, Clone, Default)]
pub struct CatalogResolver {
    catalog: HashMap<String, Vec<Version>>,
}

impl CatalogResolver {
    /// Empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register available versions for a coordinate
    #[must_use]
    pub fn with_versions(
        mut self,
        group: impl AsRef<str>,
        name: impl AsRef<str>,
        versions: Vec<Version>,
    ) -> Self {
        self.catalog
            .entry(coordinate_key(group.as_ref(), name.as_ref()))
            .or_default()
            .extend(versions);
        self
    }

    fn candidates(&self, group: &str, name: &str) -> Option<&[Version]> {
        self.catalog
            .get(&coordinate_key(group, name))
            .map(Vec::as_slice)
    }
}

fn coordinate_key(group: &str, name: &str) -> String {
    format!("{group}:{name}")
}

impl RangeResolver for CatalogResolver {
    fn resolve(
        &self,
        group: &str,
        name: &str,
        constraint: &VersionConstraint,
    ) -> Result<Version, ResolveError> {
        match self.candidates(group, name) {
            Some(versions) if !versions.is_empty() => versions
                .iter()
                .filter(|candidate| constraint.contains(candidate))
                .max()
                .cloned()
                .ok_or_else(|| ResolveError::NoSatisfyingVersion {
                    coordinate: coordinate_key(group, name),
                    constraint: constraint.as_str().to_string(),
                }),
            _ => constraint.inclusive_upper().cloned().ok_or_else(|| {
                ResolveError::NoDeterministicChoice {
                    coordinate: coordinate_key(group, name),
                    constraint: constraint.as_str().to_string(),
                }
            }),
        }
    }
}

/// Errors raised while resolving a version requirement
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The requirement string itself is broken
    #[error("malformed version range: {0}")]
    Malformed(#[from] RangeError),

    /// Known versions exist but none satisfies the requirement
    #[error("no known version of {coordinate} satisfies '{constraint}'")]
    NoSatisfyingVersion {
        coordinate: String,
        constraint: String,
    },

    /// No version metadata and no inclusive upper bound to fall back to
    #[error("no version metadata for {coordinate} and '{constraint}' has no inclusive upper bound")]
    NoDeterministicChoice {
        coordinate: String,
        constraint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn c(s: &str) -> VersionConstraint {
        VersionConstraint::parse(s).unwrap()
    }

    fn acme_catalog(versions: &[&str]) -> CatalogResolver {
        CatalogResolver::new().with_versions(
            "org.acme",
            "lib",
            versions.iter().map(|s| v(s)).collect(),
        )
    }

    #[test]
    fn resolves_highest_satisfying_candidate() {
        let resolver = acme_catalog(&["1.0", "1.5", "1.9", "2.0"]);
        let resolved = resolver.resolve("org.acme", "lib", &c("[1.0,2.0)")).unwrap();
        assert_eq!(resolved, v("1.9"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = acme_catalog(&["1.0", "1.5", "1.9"]);
        let constraint = c("[1.0,2.0)");
        let first = resolver.resolve("org.acme", "lib", &constraint).unwrap();
        let second = resolver.resolve("org.acme", "lib", &constraint).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_satisfying_candidate_fails() {
        let resolver = acme_catalog(&["3.0", "4.0"]);
        let result = resolver.resolve("org.acme", "lib", &c("[1.0,2.0)"));
        assert!(matches!(
            result,
            Err(ResolveError::NoSatisfyingVersion { .. })
        ));
    }

    #[test]
    fn unknown_coordinate_falls_back_to_inclusive_upper() {
        let resolver = CatalogResolver::new();
        let resolved = resolver.resolve("org.acme", "lib", &c("[1.0,2.0]")).unwrap();
        assert_eq!(resolved, v("2.0"));
    }

    #[test]
    fn unknown_coordinate_with_open_upper_fails() {
        let resolver = CatalogResolver::new();
        let result = resolver.resolve("org.acme", "lib", &c("[1.0,2.0)"));
        assert!(matches!(
            result,
            Err(ResolveError::NoDeterministicChoice { .. })
        ));
    }

    #[test]
    fn unknown_coordinate_with_unbounded_upper_fails() {
        let resolver = CatalogResolver::new();
        let result = resolver.resolve("org.acme", "lib", &c("[1.0,)"));
        assert!(matches!(
            result,
            Err(ResolveError::NoDeterministicChoice { .. })
        ));
    }

    #[test]
    fn snapshot_candidates_order_below_release() {
        let resolver = acme_catalog(&["1.9-SNAPSHOT", "1.9"]);
        let resolved = resolver.resolve("org.acme", "lib", &c("[1.0,2.0)")).unwrap();
        assert_eq!(resolved.as_str(), "1.9");
    }

    #[test]
    fn catalog_versions_accumulate() {
        let resolver = CatalogResolver::new()
            .with_versions("org.acme", "lib", vec![v("1.0")])
            .with_versions("org.acme", "lib", vec![v("1.5")]);
        let resolved = resolver.resolve("org.acme", "lib", &c("[1.0,2.0)")).unwrap();
        assert_eq!(resolved, v("1.5"));
    }
}
