//! Command-line interface definitions.
//!
//! Argument parsing structures using clap's derive macros. Help text for
//! each field comes from the doc comments below.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "udiff",
    version = crate::VERSION,
    about = "Compare two files and display the difference",
    long_about = "Compares two text files line by line and prints the difference in unified format, \
                  suitable for reading on a terminal or feeding to patch tools"
)]
pub struct Cli {
    /// Enable color support when printing to console
    #[arg(short = 'c', long = "color")]
    pub color: bool,

    /// Use ANSI escape codes for colors even where a native console API exists
    #[arg(short = 'a', long = "force-ansi")]
    pub force_ansi: bool,

    /// Redirect output to the file instead of a console
    #[arg(short = 'o', long = "out-file", value_name = "FILE")]
    pub out_file: Option<String>,

    /// Number of lines for context
    #[arg(
        short = 'n',
        long = "lines",
        value_name = "NUM",
        default_value_t = crate::DEFAULT_CONTEXT_LINES,
        overrides_with = "context"
    )]
    pub context: u32,

    /// Original file
    pub original: String,

    /// New (modified) file
    pub modified: String,
}
