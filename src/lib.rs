//! quotefix: one-shot literal patches for the generated FalkorDB store source
//!
//! The store generator emits `rag_falkordb_graph/temp_falkordb.go` with
//! shell-style single-quote escaping inside Cypher string literals, which
//! FalkorDB cannot parse. The three binaries under src/bin/ each apply one
//! fixed literal fix to that file, in sequence. This library holds the pure
//! transformations and the file I/O boundary they share.

pub mod byte_patch;
pub mod line_patch;
pub mod logger;
pub mod patch_file;
pub mod patterns;

// Re-export commonly used items for convenience
pub use byte_patch::replace_all;
pub use line_patch::rewrite_escape_lines;
pub use patch_file::{MarkerOutcome, patch_bytes, patch_lines, patch_marker};
