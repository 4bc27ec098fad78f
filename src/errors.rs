use std::fmt;

/// Categorized failures surfaced by the diff pipeline.
///
/// Every variant renders as a single lower-case line naming the operation
/// that failed; the driver prefixes it with `Error:` and exits with code 1.
#[derive(Debug)]
pub enum DiffError {
    /// Malformed command line, bad integer, or invalid filename.
    Argument(String),
    /// An input or output file could not be opened.
    FileOpen(String),
    /// An input file could not be read.
    FileRead(String),
    /// A file's last-modification time could not be obtained or converted.
    Metadata(String),
    /// The edit-graph search exhausted its iteration bound.
    EditScriptExhausted,
    /// Writing to the output target failed.
    SinkWrite(String),
    /// An allocation the engine needs was refused.
    Resource(String),
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(msg) | Self::Metadata(msg) => write!(f, "{msg}"),
            Self::FileOpen(path) => write!(f, "could not open {path}"),
            Self::FileRead(path) => write!(f, "could not read {path}"),
            Self::EditScriptExhausted => write!(f, "could not find edit script"),
            Self::SinkWrite(detail) => write!(f, "could not write output: {detail}"),
            Self::Resource(what) => write!(f, "could not allocate memory for {what}"),
        }
    }
}

impl std::error::Error for DiffError {}
