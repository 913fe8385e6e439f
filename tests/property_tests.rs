//! Property-based tests for quotefix
//!
//! This module uses proptest to verify core invariants of the patch
//! operations. Property-based testing generates hundreds of random inputs
//! to verify that certain properties always hold true.

use std::fs;
use tempfile::TempDir;

use quotefix::patch_file::{self, MarkerOutcome};
use quotefix::patterns::{CYPHER_QUOTE_ESCAPE, ESCAPED_QUOTE_MARKER, SHELL_QUOTE_ESCAPE};
use quotefix::{replace_all, rewrite_escape_lines};

// Import proptest macro
use proptest::prelude::*;

/// Count non-overlapping occurrences, scanning leftmost-first like the
/// substitution itself.
fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if &haystack[pos..pos + needle.len()] == needle {
            count += 1;
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    count
}

/// Intersperse `k` copies of `pattern` between filler segments.
fn intersperse(fillers: &[String], pattern: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    for (i, filler) in fillers.iter().enumerate() {
        if i > 0 {
            buf.extend_from_slice(pattern);
        }
        buf.extend_from_slice(filler.as_bytes());
    }
    buf
}

// ============================================================================
// Property 1: Byte substitution
// ============================================================================
// Every planted occurrence is replaced; nothing else changes

proptest! {
    /// A buffer with k planted occurrences comes back with k replacements
    /// and no occurrence of the pattern left behind. Filler is restricted to
    /// bytes that cannot recombine with the replacement into a new match.
    #[test]
    fn prop_all_occurrences_replaced(
        fillers in prop::collection::vec("[a-z ]{0,20}", 1..8)
    ) {
        let k = fillers.len() - 1;
        let input = intersperse(&fillers, SHELL_QUOTE_ESCAPE);

        let (output, count) = replace_all(&input, SHELL_QUOTE_ESCAPE, CYPHER_QUOTE_ESCAPE);

        prop_assert_eq!(count, k);
        prop_assert_eq!(count_occurrences(&output, SHELL_QUOTE_ESCAPE), 0);
        prop_assert_eq!(count_occurrences(&output, CYPHER_QUOTE_ESCAPE), k);
    }

    /// A buffer without the pattern round-trips byte for byte.
    #[test]
    fn prop_no_occurrence_round_trips(
        text in "[a-z0-9 .,;()]{0,200}"
    ) {
        let input = text.as_bytes();
        let (output, count) = replace_all(input, SHELL_QUOTE_ESCAPE, CYPHER_QUOTE_ESCAPE);

        prop_assert_eq!(count, 0);
        prop_assert_eq!(output, input.to_vec());
    }

    /// Once every occurrence is replaced, a second application changes
    /// nothing.
    #[test]
    fn prop_second_application_is_identity(
        fillers in prop::collection::vec("[a-z ]{0,20}", 1..8)
    ) {
        let input = intersperse(&fillers, SHELL_QUOTE_ESCAPE);

        let (once, _) = replace_all(&input, SHELL_QUOTE_ESCAPE, CYPHER_QUOTE_ESCAPE);
        let (twice, count) = replace_all(&once, SHELL_QUOTE_ESCAPE, CYPHER_QUOTE_ESCAPE);

        prop_assert_eq!(count, 0);
        prop_assert_eq!(twice, once);
    }
}

// ============================================================================
// Property 2: Marker patch
// ============================================================================
// Strict precondition: no marker, no write

proptest! {
    /// Marker absent: the file on disk is untouched and the outcome reports
    /// the failure.
    #[test]
    fn prop_marker_absent_leaves_file_untouched(
        text in "[a-z0-9 \n]{0,200}"
    ) {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("temp_falkordb.go");
        fs::write(&file_path, &text).unwrap();

        let outcome = patch_file::patch_marker(
            &file_path,
            ESCAPED_QUOTE_MARKER,
            CYPHER_QUOTE_ESCAPE,
        ).unwrap();

        prop_assert_eq!(outcome, MarkerOutcome::NotFound);
        prop_assert_eq!(fs::read(&file_path).unwrap(), text.as_bytes().to_vec());
    }

    /// Marker present: every occurrence is replaced on disk and the outcome
    /// reports how many.
    #[test]
    fn prop_marker_present_replaces_all(
        fillers in prop::collection::vec("[a-z ]{0,20}", 2..8)
    ) {
        let k = fillers.len() - 1;
        let input = intersperse(&fillers, ESCAPED_QUOTE_MARKER);

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("temp_falkordb.go");
        fs::write(&file_path, &input).unwrap();

        let outcome = patch_file::patch_marker(
            &file_path,
            ESCAPED_QUOTE_MARKER,
            CYPHER_QUOTE_ESCAPE,
        ).unwrap();

        prop_assert_eq!(outcome, MarkerOutcome::Replaced(k));

        let on_disk = fs::read(&file_path).unwrap();
        prop_assert_eq!(count_occurrences(&on_disk, ESCAPED_QUOTE_MARKER), 0);
        prop_assert_eq!(count_occurrences(&on_disk, CYPHER_QUOTE_ESCAPE), k);
    }
}

// ============================================================================
// Property 3: Line rewrite
// ============================================================================
// Lines outside the gate pass through unchanged and in order

proptest! {
    /// Lowercase lines can never contain the `strings.ReplaceAll` gate, so
    /// the rewrite is a pure pass-through that normalizes terminators.
    #[test]
    fn prop_ungated_lines_pass_through_in_order(
        lines in prop::collection::vec("[a-z0-9 ]{1,40}", 1..50)
    ) {
        let input = lines.join("\n");
        let (output, rewritten) = rewrite_escape_lines(&input);

        prop_assert_eq!(rewritten, 0);
        prop_assert_eq!(output, lines.join("\n") + "\n");
    }

    /// An escape assignment planted among ungated lines is the only line
    /// that changes; its neighbors keep their content and order.
    #[test]
    fn prop_only_gated_lines_change(
        before in prop::collection::vec("[a-z0-9 ]{1,40}", 0..20),
        after in prop::collection::vec("[a-z0-9 ]{1,40}", 0..20)
    ) {
        let escape_line = "\tescapedSource := strings.ReplaceAll(rel.Source, \"'\", \"x\")";
        let mut lines: Vec<String> = before.clone();
        lines.push(escape_line.to_string());
        lines.extend(after.clone());

        let input = lines.join("\n");
        let (output, rewritten) = rewrite_escape_lines(&input);

        prop_assert_eq!(rewritten, 1);

        let output_lines: Vec<&str> = output.lines().collect();
        prop_assert_eq!(output_lines.len(), before.len() + after.len() + 1);
        for (i, line) in before.iter().enumerate() {
            prop_assert_eq!(output_lines[i], line.as_str());
        }
        prop_assert!(output_lines[before.len()]
            .starts_with("\tescapedSource := strings.ReplaceAll(rel.Source"));
        for (i, line) in after.iter().enumerate() {
            prop_assert_eq!(output_lines[before.len() + 1 + i], line.as_str());
        }
    }
}
