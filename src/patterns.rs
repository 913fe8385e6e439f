//! Fixed literals the patch binaries search for and substitute.
//!
//! Every constant here is coupled to the exact textual output of the store
//! generator that produces `rag_falkordb_graph/temp_falkordb.go`. None of it
//! carries meaning to the patches themselves; a pattern is only a match
//! target. If the generator changes what it emits, these literals stop
//! matching: the byte and line patches degrade to rewriting the file
//! unchanged, and the marker patch fails loudly. Either outcome is the
//! signal to re-derive the literals from fresh generator output.

/// Relative path of the generated store source, as the generator lays it out.
/// All three patch binaries read and write this one file in place.
pub const TARGET_FILE: &str = "rag_falkordb_graph/temp_falkordb.go";

/// Shell-style quote escape the generator emits inside Cypher string
/// literals: `"'\''"` (bytes 22 27 5C 27 27 22). FalkorDB does not
/// understand it.
pub const SHELL_QUOTE_ESCAPE: &[u8] = &[0x22, 0x27, 0x5C, 0x27, 0x27, 0x22];

/// Backslash escape Cypher accepts: `"\\'"` (bytes 22 5C 5C 27 22). This is
/// the substitute for both [`SHELL_QUOTE_ESCAPE`] and
/// [`ESCAPED_QUOTE_MARKER`].
pub const CYPHER_QUOTE_ESCAPE: &[u8] = &[0x22, 0x5C, 0x5C, 0x27, 0x22];

/// Placeholder the generator leaves where the quote replacement string
/// belongs, double quotes included. Unlike the other two patterns, this one
/// is required to be present: a run of the marker patch against a file
/// without it means the patch sequence is being applied to the wrong
/// generator output.
pub const ESCAPED_QUOTE_MARKER: &[u8] = b"\"ESCAPED_QUOTE\"";

/// Function-call gate for the line rewrite: only the generator's escape
/// assignments call `strings.ReplaceAll` on these lines.
pub const REPLACE_CALL_GATE: &str = "strings.ReplaceAll";

/// Variable-name gate for the line rewrite: the generator names every
/// escape assignment target `escaped*`.
pub const ESCAPED_VAR_GATE: &str = "escaped";

/// Argument suffix appended to every rebuilt escape assignment, replacing
/// whatever quote arguments the generator emitted.
pub const ESCAPE_CALL_SUFFIX: &str = r#", "'", "\\\'\'")"#;
