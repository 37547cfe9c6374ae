//! Module identity and the module record
//!
//! Provides [`ModuleId`], the stable `group:name` key identifying a build
//! module, and [`Module`], the normalized record handed to the reporting
//! pipeline.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identity of a build module
///
/// Renders as `<group>:<name>`. Construction is total: absent group or
/// name segments are carried as empty strings, producing a syntactically
/// valid but semantically incomplete key. Non-emptiness is the caller's
/// concern.
///
/// # Examples
/// - `("org.acme", "lib")` → `org.acme:lib`
/// - `("", "lib")` → `:lib`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleId {
    group: String,
    name: String,
}

impl ModuleId {
    /// Create a module identity from group and name
    #[inline]
    #[must_use]
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Group segment of the key
    #[inline]
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Name segment of the key
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the `group:name` key
    #[inline]
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl Display for ModuleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

impl FromStr for ModuleId {
    type Err = ModuleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (group, name) = s
            .split_once(':')
            .ok_or_else(|| ModuleIdError::MissingSeparator(s.to_string()))?;
        Ok(Self::new(group, name))
    }
}

/// Errors related to module identities
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModuleIdError {
    /// Key without a `:` separator
    #[error("module key '{0}' has no ':' separator")]
    MissingSeparator(String),
}

/// Normalized module record
///
/// # Invariants
/// - `name` is the `group:name` key of the originating project
/// - Immutable after construction; the reporting pipeline owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    name: String,
    version: String,
}

impl Module {
    /// Create a module record from its identity and version
    #[inline]
    #[must_use]
    pub fn new(id: &ModuleId, version: impl Into<String>) -> Self {
        Self {
            name: id.key(),
            version: version.into(),
        }
    }

    /// Module key (`group:name`)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Module version
    #[inline]
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.version)
    }
}
