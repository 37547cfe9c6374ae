//! Ordered version values
//!
//! Provides [`Version`], a build-tool flavoured version with a total order:
//! dotted numeric segments, dash-separated qualifiers, and the usual
//! pre-release ladder (`alpha < beta < milestone < rc < snapshot` below the
//! plain release, `sp` above it).

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A concrete, comparable version
///
/// Keeps the raw string for display and a token list for comparison.
/// Trailing zero segments do not affect equality: `1.0` equals `1`.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number(u64),
    Qualifier(String),
}

impl Version {
    /// Parse a version string
    ///
    /// # Errors
    /// Returns [`VersionError::Empty`] for an empty or all-separator input
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let tokens = tokenize(s);
        if tokens.is_empty() {
            return Err(VersionError::Empty);
        }
        Ok(Self {
            raw: s.to_string(),
            tokens,
        })
    }

    /// Raw version string as supplied
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Split into number and qualifier tokens
///
/// `.` and `-` break tokens, as do digit/letter transitions, so `1.0a`
/// and `1.0-a` compare alike. Oversized digit runs fall back to
/// qualifier tokens rather than overflowing.
fn tokenize(s: &str) -> Vec<Token> {
    fn flush(buf: &mut String, numeric: bool, tokens: &mut Vec<Token>) {
        if buf.is_empty() {
            return;
        }
        let token = if numeric {
            buf.parse::<u64>()
                .map_or_else(|_| Token::Qualifier(buf.to_ascii_lowercase()), Token::Number)
        } else {
            Token::Qualifier(buf.to_ascii_lowercase())
        };
        tokens.push(token);
        buf.clear();
    }

    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut buf_numeric = false;

    for c in s.chars() {
        if c == '.' || c == '-' || c == '_' {
            flush(&mut buf, buf_numeric, &mut tokens);
        } else {
            let numeric = c.is_ascii_digit();
            if !buf.is_empty() && numeric != buf_numeric {
                flush(&mut buf, buf_numeric, &mut tokens);
            }
            buf.push(c);
            buf_numeric = numeric;
        }
    }
    flush(&mut buf, buf_numeric, &mut tokens);
    tokens
}

/// Rank of a qualifier on the pre-release ladder
///
/// Qualifiers below [`RELEASE_RANK`] order before the plain release,
/// `sp` orders after it, and unknown qualifiers order last, among
/// themselves lexically.
fn qualifier_rank(q: &str) -> u8 {
    match q {
        "alpha" | "a" => 1,
        "beta" | "b" => 2,
        "milestone" | "m" => 3,
        "rc" | "cr" => 4,
        "snapshot" => 5,
        "" | "ga" | "final" | "release" => RELEASE_RANK,
        "sp" => 7,
        _ => UNKNOWN_RANK,
    }
}

const RELEASE_RANK: u8 = 6;
const UNKNOWN_RANK: u8 = 8;

fn cmp_tokens(a: &Token, b: &Token) -> Ordering {
    match (a, b) {
        (Token::Number(x), Token::Number(y)) => x.cmp(y),
        // A numeric segment always orders above a qualifier
        (Token::Number(_), Token::Qualifier(_)) => Ordering::Greater,
        (Token::Qualifier(_), Token::Number(_)) => Ordering::Less,
        (Token::Qualifier(x), Token::Qualifier(y)) => {
            let (rx, ry) = (qualifier_rank(x), qualifier_rank(y));
            match rx.cmp(&ry) {
                Ordering::Equal if rx == UNKNOWN_RANK => x.cmp(y),
                ordering => ordering,
            }
        }
    }
}

/// Compare a trailing token against the implicit padding of the shorter
/// version (`1.0` vs `1`, `1.0-rc` vs `1.0`)
fn cmp_token_to_padding(token: &Token) -> Ordering {
    match token {
        Token::Number(n) => n.cmp(&0),
        Token::Qualifier(q) => qualifier_rank(q).cmp(&RELEASE_RANK),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut left = self.tokens.iter();
        let mut right = other.tokens.iter();
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) => match cmp_tokens(a, b) {
                    Ordering::Equal => {}
                    ordering => return ordering,
                },
                (Some(a), None) => match cmp_token_to_padding(a) {
                    Ordering::Equal => {}
                    ordering => return ordering,
                },
                (None, Some(b)) => match cmp_token_to_padding(b) {
                    Ordering::Equal => {}
                    ordering => return ordering.reverse(),
                },
                (None, None) => return Ordering::Equal,
            }
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors related to version strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Empty or all-separator version string
    #[error("empty version string")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn version_rejects_empty() {
        assert_eq!(Version::parse(""), Err(VersionError::Empty));
        assert_eq!(Version::parse("..-"), Err(VersionError::Empty));
    }

    #[test]
    fn version_numeric_ordering() {
        assert!(v("1.0") < v("1.5"));
        assert!(v("1.9") < v("1.10"));
        assert!(v("2.0") > v("1.99.99"));
    }

    #[test]
    fn version_trailing_zeros_equal() {
        assert_eq!(v("1.0"), v("1"));
        assert_eq!(v("1.0.0"), v("1.0"));
        assert_ne!(v("1.0.1"), v("1.0"));
    }

    #[test]
    fn version_qualifier_ladder() {
        assert!(v("1.0-alpha") < v("1.0-beta"));
        assert!(v("1.0-beta") < v("1.0-milestone"));
        assert!(v("1.0-milestone") < v("1.0-rc"));
        assert!(v("1.0-rc") < v("1.0-SNAPSHOT"));
        assert!(v("1.0-SNAPSHOT") < v("1.0"));
        assert!(v("1.0") < v("1.0-sp"));
    }

    #[test]
    fn version_release_aliases_equal() {
        assert_eq!(v("1.0"), v("1.0-ga"));
        assert_eq!(v("1.0"), v("1.0-final"));
    }

    #[test]
    fn version_rc_cr_equal() {
        assert_eq!(v("1.0-rc"), v("1.0-cr"));
    }

    #[test]
    fn version_number_beats_qualifier() {
        assert!(v("1.0.1") > v("1.0-sp"));
        assert!(v("1.1") > v("1-sp"));
    }

    #[test]
    fn version_unknown_qualifiers_lexical() {
        assert!(v("1.0-xyz") > v("1.0"));
        assert!(v("1.0-aaa") < v("1.0-bbb"));
    }

    #[test]
    fn version_digit_letter_transition_splits() {
        assert_eq!(v("1.0a"), v("1.0-a"));
        assert!(v("1.0a") < v("1.0"));
    }

    #[test]
    fn version_case_insensitive_qualifiers() {
        assert_eq!(v("1.0-ALPHA"), v("1.0-alpha"));
    }

    #[test]
    fn version_display_preserves_raw() {
        assert_eq!(v("1.0-SNAPSHOT").to_string(), "1.0-SNAPSHOT");
    }

    #[test]
    fn version_serde_round_trip() {
        let json = serde_json::to_string(&v("1.2.3-rc")).unwrap();
        assert_eq!(json, "\"1.2.3-rc\"");
        let decoded: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, v("1.2.3-rc"));
    }

    #[test]
    fn version_oversized_numeric_run_does_not_panic() {
        // Falls back to a qualifier token past u64 range
        let big = "1.99999999999999999999999999";
        let parsed = Version::parse(big).unwrap();
        assert_eq!(parsed.as_str(), big);
    }
}
