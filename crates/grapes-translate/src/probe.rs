//! File-size probe
//!
//! A single `stat` against the local filesystem. Absence and
//! unreadability degrade to `None` rather than failing the caller;
//! a missing file is semantically distinct from a zero-byte one.

use std::fs;
use std::path::Path;

/// Byte size of an existing regular file, or `None`
#[must_use]
pub fn file_size(path: &Path) -> Option<u64> {
    let metadata = fs::metadata(path).ok()?;
    metadata.is_file().then_some(metadata.len())
}
