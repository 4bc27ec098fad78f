use tracing::{Level, span};

use crate::diff::{Change, EditOp, Hunk};
use crate::errors::DiffError;
use crate::output::{Sink, StyleKind, StylePolicy};

/// Name and rendered modification time shown in a `---`/`+++` header line.
#[derive(Debug, Clone, Copy)]
pub struct FileLabel<'a> {
    pub name: &'a str,
    pub timestamp: &'a str,
}

/// A computed diff ready to be rendered in unified format.
///
/// `script` and `hunks` come from [`crate::diff::edit_script`] and
/// [`crate::diff::hunk::assemble`]; the line sequences are borrowed for the
/// duration of rendering so body lines can be copied out verbatim.
pub struct UnifiedDiff<'a> {
    pub original: &'a [Vec<u8>],
    pub modified: &'a [Vec<u8>],
    pub script: &'a [EditOp],
    pub hunks: &'a [Hunk],
    pub original_label: FileLabel<'a>,
    pub modified_label: FileLabel<'a>,
    pub modified_has_newline: bool,
}

impl UnifiedDiff<'_> {
    /// Write the diff to `sink` in unified format.
    ///
    /// Output is bytewise stable: two header lines (name, tab, timestamp),
    /// one `@@ -a,b +c,d @@` line per hunk followed by its body with
    /// ` `/`-`/`+` prefixes, and a trailing `\ No newline at end of file`
    /// marker when the modified file is not newline-terminated. With
    /// [`StylePolicy::Color`] the header lines, range lines, and changed
    /// body lines are wrapped in styling regions; sinks that do not target
    /// a terminal ignore them.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::SinkWrite`] if writing to the sink fails.
    pub fn write_to(&self, style: StylePolicy, sink: &mut dyn Sink) -> Result<(), DiffError> {
        let span = span!(Level::DEBUG, "unified_output", hunks = self.hunks.len());
        let _guard = span.enter();

        let styled = style == StylePolicy::Color;

        write_header_line(sink, styled, StyleKind::Removal, "---", &self.original_label)?;
        write_header_line(sink, styled, StyleKind::Addition, "+++", &self.modified_label)?;

        for hunk in self.hunks {
            self.write_hunk(hunk, styled, sink)?;
        }

        if !self.modified_has_newline {
            sink.write(b"\\ No newline at end of file\n")?;
        }

        Ok(())
    }

    fn write_hunk(&self, hunk: &Hunk, styled: bool, sink: &mut dyn Sink) -> Result<(), DiffError> {
        if styled {
            sink.begin_style(StyleKind::HunkRange)?;
        }
        sink.write(
            format!(
                "@@ -{},{} +{},{} @@\n",
                hunk.orig_start, hunk.orig_count, hunk.mod_start, hunk.mod_count
            )
            .as_bytes(),
        )?;
        if styled {
            sink.end_style()?;
        }

        for op in &self.script[hunk.start..=hunk.end] {
            match op.change {
                Change::Remove => {
                    if styled {
                        sink.begin_style(StyleKind::Removal)?;
                    }
                    sink.write(b"-")?;
                    sink.write(&self.original[op.orig])?;
                    sink.write(b"\n")?;
                    if styled {
                        sink.end_style()?;
                    }
                }
                Change::Insert => {
                    if styled {
                        sink.begin_style(StyleKind::Addition)?;
                    }
                    sink.write(b"+")?;
                    sink.write(&self.modified[op.modified])?;
                    sink.write(b"\n")?;
                    if styled {
                        sink.end_style()?;
                    }
                }
                Change::Equal => {
                    sink.write(b" ")?;
                    sink.write(&self.original[op.orig])?;
                    sink.write(b"\n")?;
                }
            }
        }

        Ok(())
    }
}

fn write_header_line(
    sink: &mut dyn Sink,
    styled: bool,
    style: StyleKind,
    marker: &str,
    label: &FileLabel<'_>,
) -> Result<(), DiffError> {
    if styled {
        sink.begin_style(style)?;
    }
    sink.write(format!("{} {}\t{}\n", marker, label.name, label.timestamp).as_bytes())?;
    if styled {
        sink.end_style()?;
    }
    Ok(())
}
