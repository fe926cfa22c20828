//! Statistics accumulation and summary display
//!
//! This module holds the per-root accumulator, the observer trait the walker
//! records into, and the formatters for the summary and grand-total blocks.

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Observer for per-entry statistics.
///
/// One method per entry type, independent of concrete storage, so the
/// aggregation side can be mocked in tests. The walker calls exactly one
/// method per visited entry.
pub trait StatsSink {
    fn directory(&mut self);
    fn file(&mut self, size: u64, blocks: u64);
    fn symlink(&mut self);
    fn fifo(&mut self);
    fn socket(&mut self);
    fn other(&mut self);
}

/// Accumulated totals for one traversal root.
///
/// Created zeroed per root, mutated once per visited entry, and folded into
/// the grand total by value after the root's walk returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Regular files
    pub files: u64,
    /// Directories
    pub dirs: u64,
    /// Symbolic links
    pub links: u64,
    /// Named pipes
    pub fifos: u64,
    /// Sockets
    pub socks: u64,
    /// Entries of unknown or unresolvable type
    pub others: u64,
    /// Total size of regular files, in bytes
    pub size: u64,
    /// Total 512-byte blocks allocated to regular files
    pub blocks: u64,
}

impl StatsSink for Statistics {
    fn directory(&mut self) {
        self.dirs += 1;
    }

    fn file(&mut self, size: u64, blocks: u64) {
        self.files += 1;
        self.size += size;
        self.blocks += blocks;
    }

    fn symlink(&mut self) {
        self.links += 1;
    }

    fn fifo(&mut self) {
        self.fifos += 1;
    }

    fn socket(&mut self) {
        self.socks += 1;
    }

    fn other(&mut self) {
        self.others += 1;
    }
}

impl Statistics {
    /// Fold another accumulator into this one. Used to sum completed
    /// per-root totals into the grand total.
    pub fn absorb(&mut self, other: &Statistics) {
        self.files += other.files;
        self.dirs += other.dirs;
        self.links += other.links;
        self.fifos += other.fifos;
        self.socks += other.socks;
        self.others += other.others;
        self.size += other.size;
        self.blocks += other.blocks;
    }

    /// Total number of recorded entries across every bucket.
    pub fn total_entries(&self) -> u64 {
        self.files + self.dirs + self.links + self.fifos + self.socks + self.others
    }
}

/// One root's totals, labeled by path, for JSON output.
#[derive(Debug, Serialize)]
pub struct RootSummary {
    pub path: String,
    #[serde(flatten)]
    pub stats: Statistics,
}

/// Print the per-root summary block.
pub fn print_summary(stats: &Statistics) -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "  # of files:        {}", stats.files)?;
    writeln!(stdout, "  # of directories:  {}", stats.dirs)?;
    writeln!(stdout, "  # of links:        {}", stats.links)?;
    writeln!(stdout, "  # of pipes:        {}", stats.fifos)?;
    writeln!(stdout, "  # of sockets:      {}", stats.socks)?;
    writeln!(stdout, "  total file size:   {} bytes", stats.size)?;
    writeln!(stdout, "  total blocks:      {}", stats.blocks)?;
    Ok(())
}

/// Print the grand total across all roots.
///
/// The five counts always appear; the size/blocks lines only in verbose
/// mode. That asymmetry is deliberate and matches the summary contract.
pub fn print_grand_total(
    stats: &Statistics,
    roots: usize,
    verbose: bool,
    use_color: bool,
) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    stdout.set_color(&bold)?;
    writeln!(stdout, "Analyzed {} directories:", roots)?;
    stdout.reset()?;

    writeln!(stdout, "  total # of files:        {:>16}", stats.files)?;
    writeln!(stdout, "  total # of directories:  {:>16}", stats.dirs)?;
    writeln!(stdout, "  total # of links:        {:>16}", stats.links)?;
    writeln!(stdout, "  total # of pipes:        {:>16}", stats.fifos)?;
    writeln!(stdout, "  total # of sockets:      {:>16}", stats.socks)?;

    if verbose {
        writeln!(stdout, "  total file size:         {:>16}", stats.size)?;
        writeln!(stdout, "  total # of blocks:       {:>16}", stats.blocks)?;
    }

    Ok(())
}

/// Print per-root summaries and the grand total as JSON.
pub fn print_summary_json(roots: &[RootSummary], total: &Statistics) -> io::Result<()> {
    #[derive(Serialize)]
    struct Report<'a> {
        directories: &'a [RootSummary],
        total: &'a Statistics,
    }

    let json = serde_json::to_string_pretty(&Report {
        directories: roots,
        total,
    })
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
