//! Version constraints and range expressions
//!
//! Provides [`VersionConstraint`], the parsed form of a declared version
//! requirement: either a soft pin (`1.0`) or a set of bracketed ranges
//! (`[1.0,2.0)`, `(,1.0]`, `[1.0]`, unions of those).

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::version::{Version, VersionError};

/// One end of a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// Bound version included in the range
    Inclusive(Version),
    /// Bound version excluded from the range
    Exclusive(Version),
    /// No bound on this end
    Unbounded,
}

/// A single contiguous range restriction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    lower: Bound,
    upper: Bound,
}

impl VersionRange {
    /// Lower bound of the restriction
    #[inline]
    #[must_use]
    pub fn lower(&self) -> &Bound {
        &self.lower
    }

    /// Upper bound of the restriction
    #[inline]
    #[must_use]
    pub fn upper(&self) -> &Bound {
        &self.upper
    }

    /// Whether the version falls inside the restriction
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        let above_lower = match &self.lower {
            Bound::Inclusive(low) => version >= low,
            Bound::Exclusive(low) => version > low,
            Bound::Unbounded => true,
        };
        let below_upper = match &self.upper {
            Bound::Inclusive(high) => version <= high,
            Bound::Exclusive(high) => version < high,
            Bound::Unbounded => true,
        };
        above_lower && below_upper
    }

    fn inclusive_upper(&self) -> Option<&Version> {
        match &self.upper {
            Bound::Inclusive(high) => Some(high),
            Bound::Exclusive(_) | Bound::Unbounded => None,
        }
    }
}

/// A parsed version requirement
///
/// Soft pins admit any version (the pinned one is a recommendation, which
/// doubles as the deterministic representative when no candidate metadata
/// exists). Bracketed forms admit exactly the versions inside one of their
/// restrictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    raw: String,
    kind: ConstraintKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConstraintKind {
    Soft(Version),
    Ranges(Vec<VersionRange>),
}

impl VersionConstraint {
    /// Parse a version requirement
    ///
    /// # Errors
    /// Returns [`RangeError`] for empty input, unbalanced or inverted
    /// bounds, or malformed restriction syntax
    pub fn parse(input: &str) -> Result<Self, RangeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RangeError::Empty);
        }

        let kind = if trimmed.contains(['[', '(']) {
            ConstraintKind::Ranges(parse_ranges(trimmed)?)
        } else {
            ConstraintKind::Soft(Version::parse(trimmed)?)
        };

        Ok(Self {
            raw: trimmed.to_string(),
            kind,
        })
    }

    /// Whether the version satisfies the requirement
    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        match &self.kind {
            ConstraintKind::Soft(_) => true,
            ConstraintKind::Ranges(ranges) => ranges.iter().any(|r| r.contains(version)),
        }
    }

    /// Whether this is a soft pin rather than a bracketed range
    #[inline]
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(self.kind, ConstraintKind::Soft(_))
    }

    /// Highest inclusive upper bound across restrictions, if any
    ///
    /// For a soft pin this is the recommended version itself. Used as the
    /// deterministic representative when no candidate metadata exists.
    #[must_use]
    pub fn inclusive_upper(&self) -> Option<&Version> {
        match &self.kind {
            ConstraintKind::Soft(version) => Some(version),
            ConstraintKind::Ranges(ranges) => {
                ranges.iter().filter_map(VersionRange::inclusive_upper).max()
            }
        }
    }

    /// Raw requirement string as supplied
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Display for VersionConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for VersionConstraint {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_ranges(input: &str) -> Result<Vec<VersionRange>, RangeError> {
    let malformed = |reason: &'static str| RangeError::Malformed {
        input: input.to_string(),
        reason,
    };

    let mut ranges = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let lower_inclusive = match rest.as_bytes()[0] {
            b'[' => true,
            b'(' => false,
            _ => return Err(malformed("restriction must open with '[' or '('")),
        };
        let close_idx = rest
            .find([']', ')'])
            .ok_or_else(|| malformed("unterminated restriction"))?;
        let upper_inclusive = rest.as_bytes()[close_idx] == b']';

        let restriction = parse_restriction(
            &rest[1..close_idx],
            lower_inclusive,
            upper_inclusive,
            input,
        )?;
        ranges.push(restriction);

        rest = rest[close_idx + 1..].trim_start();
        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
            if rest.is_empty() {
                return Err(malformed("trailing ',' after last restriction"));
            }
        } else if !rest.is_empty() {
            return Err(malformed("expected ',' between restrictions"));
        }
    }
    Ok(ranges)
}

fn parse_restriction(
    inner: &str,
    lower_inclusive: bool,
    upper_inclusive: bool,
    input: &str,
) -> Result<VersionRange, RangeError> {
    let malformed = |reason: &'static str| RangeError::Malformed {
        input: input.to_string(),
        reason,
    };

    if let Some((lo, hi)) = inner.split_once(',') {
        let lower = parse_bound(lo.trim(), lower_inclusive)?;
        let upper = parse_bound(hi.trim(), upper_inclusive)?;

        if let (Bound::Inclusive(low) | Bound::Exclusive(low), Bound::Inclusive(high) | Bound::Exclusive(high)) =
            (&lower, &upper)
        {
            if low > high {
                return Err(RangeError::Inverted(input.to_string()));
            }
            if low == high && !(lower_inclusive && upper_inclusive) {
                return Err(RangeError::Inverted(input.to_string()));
            }
        }
        return Ok(VersionRange { lower, upper });
    }

    // Exact pin: [1.0]
    if !(lower_inclusive && upper_inclusive) {
        return Err(malformed("exact restriction must use inclusive brackets"));
    }
    let version = Version::parse(inner.trim())?;
    Ok(VersionRange {
        lower: Bound::Inclusive(version.clone()),
        upper: Bound::Inclusive(version),
    })
}

fn parse_bound(text: &str, inclusive: bool) -> Result<Bound, RangeError> {
    if text.is_empty() {
        return Ok(Bound::Unbounded);
    }
    let version = Version::parse(text)?;
    Ok(if inclusive {
        Bound::Inclusive(version)
    } else {
        Bound::Exclusive(version)
    })
}

/// Errors related to version range expressions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Empty requirement string
    #[error("empty version range")]
    Empty,

    /// Syntactically broken restriction
    #[error("malformed version range '{input}': {reason}")]
    Malformed {
        input: String,
        reason: &'static str,
    },

    /// Lower bound above upper bound, or bounds that admit nothing
    #[error("inverted version range '{0}'")]
    Inverted(String),

    /// Invalid version inside a bound
    #[error("invalid version in range: {0}")]
    Version(#[from] VersionError),
}
