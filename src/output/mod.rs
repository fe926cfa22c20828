//! Output sinks for the walker
//!
//! Two renderings of the same traversal:
//!
//! - `tree` - box-drawing tree view with colors (the default)
//! - `flat` - bare names, one per line, for summary-only mode

mod config;
mod flat;
mod tree;

pub use config::OutputConfig;
pub use flat::FlatFormatter;
pub use tree::TreeFormatter;
