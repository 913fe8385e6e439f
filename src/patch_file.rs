//! File I/O boundary for the patch binaries.
//!
//! The pure transformations live in `byte_patch` and `line_patch`; this
//! module reads the target file, applies one of them, and writes the result
//! back in place. The write is a plain full rewrite, performed even when
//! nothing matched. There is no backup and no atomic rename: an interrupted
//! write can leave the target partially modified, and running two patch
//! binaries against the same file concurrently is not supported.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::byte_patch;
use crate::line_patch;

/// Outcome of a marker patch whose pattern is required to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerOutcome {
    /// Marker found; all occurrences replaced and the file rewritten.
    Replaced(usize),
    /// Marker absent; the file was left untouched on disk.
    NotFound,
}

/// Replace every occurrence of `pattern` with `replacement` in the file at
/// `path`, overwriting it in place.
///
/// A pattern with zero occurrences is not an error: the file is rewritten
/// unchanged and the returned count is 0.
pub fn patch_bytes(path: &Path, pattern: &[u8], replacement: &[u8]) -> Result<usize> {
    let content = fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    debug!(bytes = content.len(), "read target file");

    let (patched, count) = byte_patch::replace_all(&content, pattern, replacement);

    fs::write(path, &patched)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!(replacements = count, "byte patch applied");

    Ok(count)
}

/// Replace every occurrence of `marker` with `replacement` in the file at
/// `path`, but only if the marker is present at least once.
///
/// When the marker is absent the file is not written at all and
/// [`MarkerOutcome::NotFound`] is returned; the caller decides how to
/// report that. I/O failures are errors as usual.
pub fn patch_marker(path: &Path, marker: &[u8], replacement: &[u8]) -> Result<MarkerOutcome> {
    let content = fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    debug!(bytes = content.len(), "read target file");

    if !byte_patch::contains(&content, marker) {
        info!("marker not present, skipping write");
        return Ok(MarkerOutcome::NotFound);
    }

    let (patched, count) = byte_patch::replace_all(&content, marker, replacement);

    fs::write(path, &patched)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!(replacements = count, "marker patch applied");

    Ok(MarkerOutcome::Replaced(count))
}

/// Run the escape-assignment line rewrite over the file at `path`,
/// overwriting it in place.
///
/// Returns the number of lines rebuilt; 0 means the file was rewritten
/// with every line passed through unchanged.
pub fn patch_lines(path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    debug!(bytes = content.len(), "read target file");

    let (patched, rewritten) = line_patch::rewrite_escape_lines(&content);

    fs::write(path, patched)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!(rewritten, "line patch applied");

    Ok(rewritten)
}
