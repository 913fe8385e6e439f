//! Rebuilds the generator's four escape-assignment lines with the corrected
//! argument suffix. Applied second in the patch sequence, after
//! fix-quote-bytes.
//!
//! Lines that match neither gate, or match the gates but none of the known
//! assignment forms, pass through unchanged; that is not a failure.

use anyhow::Result;
use std::path::Path;

use quotefix::logger;
use quotefix::patch_file;
use quotefix::patterns::TARGET_FILE;

fn main() -> Result<()> {
    logger::init();

    patch_file::patch_lines(Path::new(TARGET_FILE))?;

    Ok(())
}
