//! Configuration for tree walking

/// Default bound on descent depth. Deep enough for any real tree, finite so
/// a pathological one cannot exhaust the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Maximum number of levels descended below each root. A directory at
    /// the limit is still listed and counted, but not entered.
    pub max_depth: usize,
    /// Glob patterns pruned from the walk. Matched against entry names,
    /// not full paths.
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore_patterns: Vec::new(),
        }
    }
}
