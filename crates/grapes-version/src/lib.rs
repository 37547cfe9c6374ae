//! Grapes Version Handling
//!
//! Version ordering, range parsing, and range resolution for build
//! artifacts.
//!
//! # Core Concepts
//!
//! - [`Version`]: concrete version with a total order (numeric segments,
//!   pre-release qualifier ladder)
//! - [`VersionConstraint`]: parsed requirement — soft pin or bracketed
//!   range set
//! - [`RangeResolver`]: seam for selecting one concrete version from a
//!   requirement
//! - [`CatalogResolver`]: default resolver over known available versions
//!
//! # Example
//!
//! ```rust
//! use grapes_version::{CatalogResolver, RangeResolver, Version, VersionConstraint};
//!
//! let resolver = CatalogResolver::new().with_versions(
//!     "org.acme",
//!     "lib",
//!     vec!["1.0".parse().unwrap(), "1.9".parse().unwrap()],
//! );
//! let constraint = VersionConstraint::parse("[1.0,2.0)").unwrap();
//! let resolved = resolver.resolve("org.acme", "lib", &constraint).unwrap();
//! assert_eq!(resolved, "1.9".parse::<Version>().unwrap());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod range;
mod resolver;
mod version;

// Re-exports
pub use range::{Bound, RangeError, VersionConstraint, VersionRange};
pub use resolver::{CatalogResolver, RangeResolver, ResolveError};
pub use version::{Version, VersionError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
