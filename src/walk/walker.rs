//! Recursive descent over a directory tree

use std::io;
use std::path::Path;

use crate::summary::StatsSink;

use super::config::WalkConfig;
use super::entry::{Entry, EntryKind, read_entries, sort_entries};
use super::utils::should_ignore_name;

/// Callback for streaming output - receives each visited entry for display.
///
/// The walker never buffers the listing; a sink sees entries in the exact
/// order they are visited and decides how (or whether) to render them.
pub trait EntrySink {
    /// Called once with the root path before any of its children.
    fn root(&mut self, path: &Path) -> io::Result<()>;

    /// Called once per visited entry, in traversal order. `prefix` encodes
    /// the ancestry for tree-style rendering; flat sinks ignore it.
    fn entry(&mut self, entry: &Entry, prefix: &str, is_last: bool) -> io::Result<()>;

    /// Called when a directory cannot be opened. The subtree is skipped;
    /// traversal of siblings continues.
    fn unreadable(&mut self, path: &Path, err: &io::Error) {
        eprintln!("grove: cannot open '{}': {}", path.display(), err);
    }

    /// Called after the walk with the number of visited directories and
    /// non-directory entries.
    fn finish(&mut self, _dirs: u64, _files: u64) -> io::Result<()> {
        Ok(())
    }
}

/// Totals returned by a completed walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkReport {
    /// Directories visited (the root itself is not counted).
    pub dirs: u64,
    /// Non-directory entries visited.
    pub files: u64,
    /// Subtrees that were listed but not entered because of the depth bound.
    pub pruned: u64,
}

/// Depth-first, pre-order tree walker.
///
/// Visits each directory's entry before descending into it, recurses only
/// into entries typed directory (symlinks to directories are links, which
/// rules out cycles by construction), and records every visited entry into
/// a [`StatsSink`] at the moment it is classified.
pub struct TreeWalker {
    config: WalkConfig,
}

impl TreeWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Walk `root`, emitting entries to `output` and observations to `stats`.
    ///
    /// An unreadable root is reported through the sink and yields an empty
    /// report; it is not an error.
    pub fn walk<O, S>(
        &self,
        root: &Path,
        output: &mut O,
        stats: &mut S,
    ) -> io::Result<WalkReport>
    where
        O: EntrySink,
        S: StatsSink,
    {
        let mut report = WalkReport::default();
        output.root(root)?;
        self.walk_dir(root, 0, "", output, stats, &mut report)?;
        output.finish(report.dirs, report.files)?;
        Ok(report)
    }

    fn walk_dir<O, S>(
        &self,
        path: &Path,
        depth: usize,
        prefix: &str,
        output: &mut O,
        stats: &mut S,
        report: &mut WalkReport,
    ) -> io::Result<()>
    where
        O: EntrySink,
        S: StatsSink,
    {
        // Base case: the directory cannot be opened. Skip the subtree; the
        // sink gets one diagnostic and siblings are unaffected. The read_dir
        // handle inside read_entries is dropped before any recursion below.
        let mut entries = match read_entries(path) {
            Ok(entries) => entries,
            Err(err) => {
                output.unreadable(path, &err);
                return Ok(());
            }
        };

        entries.retain(|e| !should_ignore_name(&e.name, &self.config.ignore_patterns));

        // Base case: nothing to visit.
        if entries.is_empty() {
            return Ok(());
        }

        sort_entries(&mut entries);

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == total - 1;

            // Visit: print first, then count, then descend.
            output.entry(entry, prefix, is_last)?;
            record(entry, stats);

            if entry.kind == EntryKind::Directory {
                report.dirs += 1;
                if depth + 1 >= self.config.max_depth {
                    report.pruned += 1;
                    continue;
                }
                let child_prefix = if is_last {
                    format!("{prefix}    ")
                } else {
                    format!("{prefix}│   ")
                };
                self.walk_dir(
                    &path.join(&entry.name),
                    depth + 1,
                    &child_prefix,
                    output,
                    stats,
                    report,
                )?;
            } else {
                report.files += 1;
            }
        }

        Ok(())
    }
}

/// Fold one classified entry into the statistics observer. Size and blocks
/// accumulate for regular files only.
fn record<S: StatsSink>(entry: &Entry, stats: &mut S) {
    match entry.kind {
        EntryKind::Directory => stats.directory(),
        EntryKind::File => stats.file(entry.size, entry.blocks),
        EntryKind::Symlink => stats.symlink(),
        EntryKind::Fifo => stats.fifo(),
        EntryKind::Socket => stats.socket(),
        EntryKind::Other => stats.other(),
    }
}
