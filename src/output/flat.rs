//! Flat listing sink

use std::io::{self, Write};
use std::path::Path;

use crate::walk::{Entry, EntrySink};

/// Prints bare entry names, one per line, in traversal order. Used in
/// summary-only mode, where the per-root header already names the root.
pub struct FlatFormatter {
    stdout: io::Stdout,
}

impl FlatFormatter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for FlatFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl EntrySink for FlatFormatter {
    fn root(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn entry(&mut self, entry: &Entry, _prefix: &str, _is_last: bool) -> io::Result<()> {
        writeln!(self.stdout, "{}", entry.name.to_string_lossy())
    }
}
