//! Shared utility functions for tree walking

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use glob::Pattern;

/// Normalize a root path supplied on the command line.
///
/// `"A/"` and `"A"` must traverse (and display) identically, so trailing
/// separators and redundant `.` components are dropped. An empty path means
/// the current directory.
pub fn normalize_root(path: &Path) -> PathBuf {
    let normalized: PathBuf = path.components().collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Check if an entry name matches any of the ignore patterns.
pub fn should_ignore_name(name: &OsStr, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let name = name.to_string_lossy();
    patterns
        .iter()
        .any(|p| p.as_str() == name.as_ref() || glob_match(p, &name))
}

/// Format a size in bytes to human-readable form.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
