//! Output sinks for rendered diff text.
//!
//! A [`Sink`] receives raw bytes plus advisory styling regions and routes
//! them to standard output or a file. Styling is applied only by the
//! console sink, and only when standard output is a terminal; the file sink
//! always writes plain bytes.

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Stdout, Write};
use std::path::Path;

use crossterm::Command;
use crossterm::style::{Color, ResetColor, SetForegroundColor};

use crate::errors::DiffError;

/// Advisory styling categories the formatter can open around a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// Removed lines and the `---` header line.
    Removal,
    /// Inserted lines and the `+++` header line.
    Addition,
    /// The `@@` hunk range line.
    HunkRange,
}

impl StyleKind {
    const fn color(self) -> Color {
        match self {
            Self::Removal => Color::DarkRed,
            Self::Addition => Color::DarkGreen,
            Self::HunkRange => Color::DarkMagenta,
        }
    }
}

/// Whether the formatter should open styling regions at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePolicy {
    Plain,
    Color,
}

/// Destination for formatted diff text.
///
/// Styling calls are advisory: a sink may ignore them, and `begin_style`
/// regions left open are reset by the next `end_style`.
pub trait Sink {
    /// Append raw bytes to the output.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::SinkWrite`] if the underlying write fails.
    fn write(&mut self, bytes: &[u8]) -> Result<(), DiffError>;

    /// Open a styled region.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::SinkWrite`] if emitting the style fails.
    fn begin_style(&mut self, style: StyleKind) -> Result<(), DiffError>;

    /// Close the current styled region.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::SinkWrite`] if emitting the reset fails.
    fn end_style(&mut self) -> Result<(), DiffError>;

    /// Flush buffered output and release the underlying handle.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::SinkWrite`] if the final flush fails.
    fn close(self: Box<Self>) -> Result<(), DiffError>;
}

fn write_failure(err: &io::Error) -> DiffError {
    DiffError::SinkWrite(err.to_string())
}

/// Console sink writing to standard output.
///
/// Styling regions are honoured only while standard output is a terminal.
/// They are rendered through crossterm, which picks ANSI escapes or the
/// host's native console attributes; `force_ansi` bypasses that choice and
/// always writes the ANSI rendering of the same commands.
pub struct ConsoleSink {
    out: BufWriter<Stdout>,
    styled: bool,
    force_ansi: bool,
}

impl ConsoleSink {
    #[must_use]
    pub fn stdout(force_ansi: bool) -> Self {
        Self {
            out: BufWriter::with_capacity(64 * 1024, io::stdout()),
            styled: io::stdout().is_terminal(),
            force_ansi,
        }
    }

    fn apply(&mut self, command: impl Command) -> Result<(), DiffError> {
        if self.force_ansi {
            let mut rendered = String::new();
            command
                .write_ansi(&mut rendered)
                .map_err(|_| DiffError::SinkWrite("could not render style".to_string()))?;
            self.out
                .write_all(rendered.as_bytes())
                .map_err(|err| write_failure(&err))
        } else {
            crossterm::queue!(self.out, command).map_err(|err| write_failure(&err))
        }
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), DiffError> {
        self.out
            .write_all(bytes)
            .map_err(|err| write_failure(&err))
    }

    fn begin_style(&mut self, style: StyleKind) -> Result<(), DiffError> {
        if !self.styled {
            return Ok(());
        }
        self.apply(SetForegroundColor(style.color()))
    }

    fn end_style(&mut self) -> Result<(), DiffError> {
        if !self.styled {
            return Ok(());
        }
        self.apply(ResetColor)
    }

    fn close(mut self: Box<Self>) -> Result<(), DiffError> {
        self.out.flush().map_err(|err| write_failure(&err))
    }
}

/// File sink created for `-o`/`--out-file`.
///
/// The file handle is acquired on construction and flushed on `close`;
/// styling calls are ignored so redirected output stays byte-clean.
pub struct FileSink {
    out: BufWriter<File>,
}

impl FileSink {
    /// # Errors
    ///
    /// Returns [`DiffError::FileOpen`] if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self, DiffError> {
        let file =
            File::create(path).map_err(|_| DiffError::FileOpen(path.display().to_string()))?;
        Ok(Self {
            out: BufWriter::with_capacity(64 * 1024, file),
        })
    }
}

impl Sink for FileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), DiffError> {
        self.out
            .write_all(bytes)
            .map_err(|err| write_failure(&err))
    }

    fn begin_style(&mut self, _style: StyleKind) -> Result<(), DiffError> {
        Ok(())
    }

    fn end_style(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn close(mut self: Box<Self>) -> Result<(), DiffError> {
        self.out.flush().map_err(|err| write_failure(&err))
    }
}
