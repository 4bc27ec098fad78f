//! The diff pipeline: read, compute, assemble, render.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::cli::Cli;
use crate::diff::unified::{FileLabel, UnifiedDiff};
use crate::diff::{hunk, myers};
use crate::errors::DiffError;
use crate::output::{ConsoleSink, FileSink, Sink, StylePolicy};
use crate::utils::{fs, paths, timestamps};

/// Run a full diff for the parsed command line.
///
/// # Errors
///
/// Surfaces every [`DiffError`] from the pipeline: invalid filenames,
/// unreadable inputs, metadata failures, an exhausted edit-graph search,
/// or a failing output target.
pub fn run(cli: &Cli) -> Result<()> {
    if !paths::is_valid_filename(&cli.original) || !paths::is_valid_filename(&cli.modified) {
        return Err(DiffError::Argument("input file name is not valid".to_string()).into());
    }
    if let Some(out_file) = &cli.out_file {
        if !paths::is_valid_filename(out_file) {
            return Err(DiffError::Argument("output file name is not valid".to_string()).into());
        }
    }

    let original_path = Path::new(&cli.original);
    let modified_path = Path::new(&cli.modified);

    let original = fs::read_lines(original_path)?;
    let modified = fs::read_lines(modified_path)?;

    let script = myers::edit_script(&original, &modified)?;
    let hunks = hunk::assemble(&script, cli.context as usize);
    debug!(
        operations = script.len(),
        hunks = hunks.len(),
        context = cli.context,
        "diff computed"
    );

    let original_stamp = timestamps::format_mod_time(original_path)?;
    let modified_stamp = timestamps::format_mod_time(modified_path)?;
    let modified_has_newline = fs::has_trailing_newline(modified_path)?;

    let diff = UnifiedDiff {
        original: &original,
        modified: &modified,
        script: &script,
        hunks: &hunks,
        original_label: FileLabel {
            name: &cli.original,
            timestamp: &original_stamp,
        },
        modified_label: FileLabel {
            name: &cli.modified,
            timestamp: &modified_stamp,
        },
        modified_has_newline,
    };

    // Redirected output is always plain; color applies only on a console.
    let (mut sink, style): (Box<dyn Sink>, StylePolicy) = match &cli.out_file {
        Some(out_file) => (
            Box::new(FileSink::create(Path::new(out_file))?),
            StylePolicy::Plain,
        ),
        None => {
            let style = if cli.color {
                StylePolicy::Color
            } else {
                StylePolicy::Plain
            };
            (Box::new(ConsoleSink::stdout(cli.force_ansi)), style)
        }
    };

    diff.write_to(style, sink.as_mut())?;
    sink.close()?;

    Ok(())
}
