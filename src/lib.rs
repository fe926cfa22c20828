//! grove - walk directory trees, listing every entry and tallying per-type statistics

pub mod output;
pub mod summary;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{FlatFormatter, OutputConfig, TreeFormatter};
pub use summary::{
    RootSummary, Statistics, StatsSink, print_grand_total, print_summary, print_summary_json,
};
pub use walk::{
    DEFAULT_MAX_DEPTH, Entry, EntryKind, EntrySink, TreeWalker, WalkConfig, WalkReport,
};
