//! Tree-view output sink

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::walk::{Entry, EntryKind, EntrySink, format_size};

use super::config::OutputConfig;

/// Streaming tree formatter - prints entries with box-drawing prefixes as
/// the walker visits them, without buffering the tree.
pub struct TreeFormatter {
    config: OutputConfig,
    stdout: StandardStream,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
        }
    }

    fn name_color(kind: EntryKind) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match kind {
            EntryKind::Directory => {
                spec.set_fg(Some(Color::Blue)).set_bold(true);
            }
            EntryKind::Symlink => {
                spec.set_fg(Some(Color::Cyan));
            }
            EntryKind::Fifo | EntryKind::Socket => {
                spec.set_fg(Some(Color::Yellow));
            }
            EntryKind::File | EntryKind::Other => {
                spec.set_fg(Some(Color::White));
            }
        }
        spec
    }
}

impl EntrySink for TreeFormatter {
    fn root(&mut self, path: &Path) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(self.stdout, "{}", path.display())?;
        self.stdout.reset()
    }

    fn entry(&mut self, entry: &Entry, prefix: &str, is_last: bool) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };
        write!(self.stdout, "{}{}", prefix, connector)?;

        self.stdout.set_color(&Self::name_color(entry.kind))?;
        write!(self.stdout, "{}", entry.name.to_string_lossy())?;
        self.stdout.reset()?;

        if self.config.verbose && entry.kind == EntryKind::File {
            write!(self.stdout, "  ")?;
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.stdout, "[{}]", format_size(entry.size))?;
            self.stdout.reset()?;
        }

        writeln!(self.stdout)
    }

    fn finish(&mut self, dirs: u64, files: u64) -> io::Result<()> {
        writeln!(self.stdout)?;
        writeln!(self.stdout, "{} directories, {} files", dirs, files)
    }
}
