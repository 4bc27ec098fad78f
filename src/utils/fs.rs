use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::errors::DiffError;

/// Read a file as an ordered sequence of lines.
///
/// Lines are split on `\n` and the terminator is dropped; a trailing
/// newline does not produce a final empty line. Content stays raw bytes,
/// so lines compare bytewise and never round-trip through UTF-8.
///
/// # Errors
///
/// Returns [`DiffError::FileOpen`] if the file cannot be opened and
/// [`DiffError::FileRead`] if reading fails midway.
pub fn read_lines(path: &Path) -> Result<Vec<Vec<u8>>, DiffError> {
    let bytes = std::fs::read(path).map_err(|err| read_error(path, &err))?;
    Ok(split_lines(&bytes))
}

fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<Vec<u8>> = bytes.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect();
    if bytes.last() == Some(&b'\n') {
        lines.pop();
    }
    lines
}

/// Report whether the file's last byte is a line feed.
///
/// A zero-length file has no final line to leave unterminated and reports
/// `true`.
///
/// # Errors
///
/// Returns [`DiffError::FileOpen`] if the file cannot be opened and
/// [`DiffError::FileRead`] if seeking or reading the last byte fails.
pub fn has_trailing_newline(path: &Path) -> Result<bool, DiffError> {
    let mut file = File::open(path).map_err(|err| read_error(path, &err))?;
    let len = file
        .metadata()
        .map_err(|_| DiffError::FileRead(path.display().to_string()))?
        .len();
    if len == 0 {
        return Ok(true);
    }

    file.seek(SeekFrom::End(-1))
        .map_err(|_| DiffError::FileRead(path.display().to_string()))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)
        .map_err(|_| DiffError::FileRead(path.display().to_string()))?;
    Ok(last[0] == b'\n')
}

fn read_error(path: &Path, err: &io::Error) -> DiffError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            DiffError::FileOpen(path.display().to_string())
        }
        _ => DiffError::FileRead(path.display().to_string()),
    }
}
