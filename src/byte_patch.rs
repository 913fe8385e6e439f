//! Byte-level literal substitution.
//!
//! Pure functions over byte slices; no filesystem access. The I/O boundary
//! in `patch_file` feeds these whole file contents and writes the result
//! back.

/// Replace every non-overlapping occurrence of `pattern` in `haystack` with
/// `replacement`, scanning leftmost-first.
///
/// Returns the rewritten buffer and the number of replacements made. With
/// zero occurrences the returned buffer equals `haystack` byte for byte.
/// An empty pattern never matches.
pub fn replace_all(haystack: &[u8], pattern: &[u8], replacement: &[u8]) -> (Vec<u8>, usize) {
    if pattern.is_empty() {
        return (haystack.to_vec(), 0);
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut count = 0;
    let mut pos = 0;

    while let Some(offset) = find_from(haystack, pattern, pos) {
        out.extend_from_slice(&haystack[pos..offset]);
        out.extend_from_slice(replacement);
        pos = offset + pattern.len();
        count += 1;
    }
    out.extend_from_slice(&haystack[pos..]);

    (out, count)
}

/// Check whether `needle` occurs anywhere in `haystack`.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && find_from(haystack, needle, 0).is_some()
}

/// Find the first occurrence of `needle` at or after `start`.
fn find_from(haystack: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    haystack
        .get(start..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| start + i)
}
