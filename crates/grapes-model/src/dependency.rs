//! Dependency edges
//!
//! A [`DependencyEdge`] pairs a normalized [`Artifact`] with a validated
//! [`Scope`].

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::artifact::Artifact;
use crate::scope::Scope;

/// Typed dependency edge of the module graph
///
/// # Invariants
/// - `scope` belongs to the closed [`Scope`] enumeration (unvalidated
///   strings never reach this type)
/// - Immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEdge {
    target: Artifact,
    scope: Scope,
}

impl DependencyEdge {
    /// Create an edge from a normalized artifact and a validated scope
    #[inline]
    #[must_use]
    pub fn new(target: Artifact, scope: Scope) -> Self {
        Self { target, scope }
    }

    /// Target artifact of the edge
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Artifact {
        &self.target
    }

    /// Declared scope of the edge
    #[inline]
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }
}

impl Display for DependencyEdge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.target, self.scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_carries_artifact_and_scope() {
        let artifact = Artifact::new("org.acme", "lib", "1.0.0", None, "jar", "jar");
        let edge = DependencyEdge::new(artifact.clone(), Scope::Test);
        assert_eq!(edge.target(), &artifact);
        assert_eq!(edge.scope(), Scope::Test);
    }

    #[test]
    fn edge_display_includes_scope() {
        let artifact = Artifact::new("org.acme", "lib", "1.0.0", None, "jar", "jar");
        let edge = DependencyEdge::new(artifact, Scope::Runtime);
        assert_eq!(edge.to_string(), "org.acme:lib:1.0.0::jar (runtime)");
    }

    #[test]
    fn edge_serializes_scope_lowercase() {
        let artifact = Artifact::new("org.acme", "lib", "1.0.0", None, "jar", "jar");
        let edge = DependencyEdge::new(artifact, Scope::Provided);
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["scope"], "provided");
        assert_eq!(json["target"]["groupId"], "org.acme");
    }
}
