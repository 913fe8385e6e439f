//! Rewrites the shell-style quote escape the store generator emits into the
//! backslash escape Cypher accepts. Applied first in the patch sequence.
//!
//! A target without the escape sequence is rewritten unchanged; that is not
//! a failure.

use anyhow::Result;
use std::path::Path;

use quotefix::logger;
use quotefix::patch_file;
use quotefix::patterns::{CYPHER_QUOTE_ESCAPE, SHELL_QUOTE_ESCAPE, TARGET_FILE};

fn main() -> Result<()> {
    logger::init();

    patch_file::patch_bytes(
        Path::new(TARGET_FILE),
        SHELL_QUOTE_ESCAPE,
        CYPHER_QUOTE_ESCAPE,
    )?;

    Ok(())
}
