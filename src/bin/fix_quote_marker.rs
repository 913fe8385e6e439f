//! Replaces the generator's `"ESCAPED_QUOTE"` placeholder with the
//! backslash escape Cypher accepts. Applied last in the patch sequence.
//!
//! Unlike the other two patches, the placeholder is required: its absence
//! means the sequence is running against the wrong generator output, so the
//! file is left untouched and the process exits non-zero.

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use quotefix::logger;
use quotefix::patch_file::{self, MarkerOutcome};
use quotefix::patterns::{CYPHER_QUOTE_ESCAPE, ESCAPED_QUOTE_MARKER, TARGET_FILE};

fn main() -> Result<ExitCode> {
    logger::init();

    let outcome = patch_file::patch_marker(
        Path::new(TARGET_FILE),
        ESCAPED_QUOTE_MARKER,
        CYPHER_QUOTE_ESCAPE,
    )?;

    match outcome {
        MarkerOutcome::Replaced(_) => Ok(ExitCode::SUCCESS),
        MarkerOutcome::NotFound => {
            println!("Pattern not found!");
            Ok(ExitCode::FAILURE)
        }
    }
}
