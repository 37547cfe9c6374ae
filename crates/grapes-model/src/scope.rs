//! Dependency scopes
//!
//! Provides [`Scope`], the closed enumeration of declared usage contexts a
//! dependency may carry. Any string outside the set is rejected with
//! [`UnsupportedScope`].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declared usage context of a dependency
///
/// Closed set; parsing is case-insensitive. The recognized values are
/// exposed through [`Scope::ALL`] so callers can enumerate them in
/// diagnostics without hardcoding the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Needed to compile against and at runtime (the default)
    Compile,
    /// Needed at runtime only
    Runtime,
    /// Needed for tests only
    Test,
    /// Provided by the target environment
    Provided,
    /// Provided by the system at an explicit path
    System,
    /// Imported dependency management (BOM)
    Import,
}

impl Scope {
    /// Every recognized scope, in declaration order
    pub const ALL: [Scope; 6] = [
        Scope::Compile,
        Scope::Runtime,
        Scope::Test,
        Scope::Provided,
        Scope::System,
        Scope::Import,
    ];

    /// Canonical lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Runtime => "runtime",
            Scope::Test => "test",
            Scope::Provided => "provided",
            Scope::System => "system",
            Scope::Import => "import",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = UnsupportedScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedScope(s.to_string()))
    }
}

/// Scope string outside the closed set
///
/// Carries the offending string verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported dependency scope '{0}'")]
pub struct UnsupportedScope(pub String);
