//! Components of the `cuboids` command-line tool, which builds a region of space from a
//! script of cuboid additions and removals and reports on the result.
//!
//! This library exists so that the pieces of the tool can be tested separately; it is not
//! intended for general use.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use std::io::{self, Read as _};
use std::path::Path;

use anyhow::Context as _;

pub mod logging;
mod report;
pub use report::{Report, ReportError, write_report};
mod script;
pub use script::{Action, Instruction, LineError, Script, ScriptError};

/// Reads the whole script text from the file at `path`, or from standard input if `path` is
/// [`None`] or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, anyhow::Error> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script from {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read script from standard input")?;
            Ok(text)
        }
    }
}
