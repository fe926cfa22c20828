//! CLI entry point for grove

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum, error::ErrorKind};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use grove::walk::normalize_root;
use grove::{
    DEFAULT_MAX_DEPTH, Entry, EntrySink, FlatFormatter, OutputConfig, RootSummary, Statistics,
    TreeFormatter, TreeWalker, WalkConfig, print_grand_total, print_summary, print_summary_json,
};

/// Maximum number of root paths accepted on the command line.
const MAX_ROOTS: usize = 64;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "grove")]
#[command(about = "Gather information about directory trees")]
#[command(version)]
struct Args {
    /// Directories to analyze (default: the current directory)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Print the directory tree (default if no other mode is given)
    #[arg(short = 't', long)]
    tree: bool,

    /// Print a summary per directory and a grand total
    #[arg(short = 's', long)]
    summary: bool,

    /// Print detailed information for each entry; turns on tree view
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// Prune entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// With -s, print the summary as JSON instead of a listing
    #[arg(long = "json", requires = "summary")]
    json: bool,
}

/// Sink that discards the listing; `--json` traverses for totals only.
struct SilentSink;

impl EntrySink for SilentSink {
    fn root(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn entry(&mut self, _entry: &Entry, _prefix: &str, _is_last: bool) -> io::Result<()> {
        Ok(())
    }
}

/// Print the per-root header used in summary mode.
fn print_directory_header(root: &Path, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    writeln!(stdout)?;
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "Directory: {}", root.display())?;
    stdout.reset()?;
    Ok(())
}

fn run(args: &Args) -> io::Result<()> {
    let mut config = WalkConfig {
        ignore_patterns: args.ignore.clone(),
        ..WalkConfig::default()
    };
    if let Some(level) = args.level {
        config.max_depth = level;
    }

    // Verbose implies the tree view; summary alone gets the flat listing.
    let tree_view = args.tree || args.verbose || !args.summary;
    let use_color = should_use_color(args.color);

    let mut roots = args.paths.clone();
    if roots.len() > MAX_ROOTS {
        for extra in &roots[MAX_ROOTS..] {
            eprintln!(
                "grove: warning: maximum of {} directories exceeded, ignoring '{}'",
                MAX_ROOTS,
                extra.display()
            );
        }
        roots.truncate(MAX_ROOTS);
    }
    if roots.is_empty() {
        roots.push(PathBuf::from("."));
    }

    let walker = TreeWalker::new(config);
    let mut total = Statistics::default();
    let mut per_root = Vec::with_capacity(roots.len());

    for path in &roots {
        let root = normalize_root(path);
        let mut stats = Statistics::default();

        if args.summary && !args.json {
            print_directory_header(&root, use_color)?;
        }

        let report = if args.json {
            walker.walk(&root, &mut SilentSink, &mut stats)?
        } else if tree_view {
            let output_config = OutputConfig {
                use_color,
                verbose: args.verbose,
            };
            walker.walk(&root, &mut TreeFormatter::new(output_config), &mut stats)?
        } else {
            walker.walk(&root, &mut FlatFormatter::new(), &mut stats)?
        };

        // The default depth bound is a safety net; only mention it when the
        // user did not pick a level themselves.
        if report.pruned > 0 && args.level.is_none() {
            eprintln!(
                "grove: warning: {} subtree(s) below '{}' exceed {} levels and were not entered",
                report.pruned,
                root.display(),
                DEFAULT_MAX_DEPTH
            );
        }

        if args.summary && !args.json {
            print_summary(&stats)?;
        }

        total.absorb(&stats);
        per_root.push(RootSummary {
            path: root.display().to_string(),
            stats,
        });
    }

    if args.json {
        print_summary_json(&per_root, &total)?;
    } else if args.summary && per_root.len() > 1 {
        print_grand_total(&total, per_root.len(), args.verbose, use_color)?;
    }

    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage problems and explicit -h both land here; either way no
            // traversal ran, so exit with failure after printing.
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(1),
            }
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("grove: error writing output: {}", e);
        process::exit(1);
    }
}
