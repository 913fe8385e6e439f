//! Line-level rewrite of the generator's escape assignments.
//!
//! The generator emits four escape assignments, one per Cypher string it
//! interpolates. Each is rebuilt from scratch with the corrected argument
//! suffix rather than edited in place, so whatever quote arguments the
//! generator produced are discarded wholesale.

use crate::patterns::{ESCAPE_CALL_SUFFIX, ESCAPED_VAR_GATE, REPLACE_CALL_GATE};

/// Indentation the generator uses for every escape assignment.
const INDENT: &str = "\t";

struct Rewrite {
    /// Assignment-target marker the line must contain.
    decl: &'static str,
    /// Second containment check, where the target marker alone is ambiguous.
    qualifier: Option<&'static str>,
    /// Rebuilt line up to the argument suffix.
    rebuilt: &'static str,
}

impl Rewrite {
    fn matches(&self, line: &str) -> bool {
        line.contains(self.decl) && self.qualifier.is_none_or(|q| line.contains(q))
    }
}

// First match wins. `escapedID :=` appears twice; only the qualifier tells
// the entity form from the relation form, so the entity entry must stay
// ahead of the relation entry.
const REWRITES: [Rewrite; 4] = [
    Rewrite {
        decl: "escapedID :=",
        qualifier: Some("entity.ID"),
        rebuilt: "escapedID := strings.ReplaceAll(entity.ID",
    },
    Rewrite {
        decl: "escapedSource :=",
        qualifier: None,
        rebuilt: "escapedSource := strings.ReplaceAll(rel.Source",
    },
    Rewrite {
        decl: "escapedTarget :=",
        qualifier: None,
        rebuilt: "escapedTarget := strings.ReplaceAll(rel.Target",
    },
    Rewrite {
        decl: "escapedID :=",
        qualifier: Some("rel.ID"),
        rebuilt: "escapedID := strings.ReplaceAll(rel.ID",
    },
];

/// Rewrite every escape-assignment line in `input`, passing all other lines
/// through unchanged and in order.
///
/// Returns the rewritten content and the number of lines rebuilt. Every
/// output line, the last included, is terminated with `\n`.
pub fn rewrite_escape_lines(input: &str) -> (String, usize) {
    let mut out = String::with_capacity(input.len());
    let mut rewritten = 0;

    for line in input.lines() {
        match rewrite_line(line) {
            Some(rebuilt) => {
                out.push_str(&rebuilt);
                rewritten += 1;
            }
            None => out.push_str(line),
        }
        out.push('\n');
    }

    (out, rewritten)
}

/// Rebuild a single escape-assignment line, or `None` to pass it through.
fn rewrite_line(line: &str) -> Option<String> {
    if !(line.contains(REPLACE_CALL_GATE) && line.contains(ESCAPED_VAR_GATE)) {
        return None;
    }

    let rewrite = REWRITES.iter().find(|r| r.matches(line))?;
    Some(format!("{INDENT}{}{ESCAPE_CALL_SUFFIX}", rewrite.rebuilt))
}
