//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Verbose mode annotates regular files with their size.
    pub verbose: bool,
}
