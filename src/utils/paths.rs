/// Maximum base-name length accepted for input and output files.
const MAX_BASE_NAME_LEN: usize = 255;

/// Characters rejected in base names (Windows filename rules).
const INVALID_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Base names reserved by Windows, matched case-insensitively.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "LPT1", "LPT2", "LPT3",
];

/// Check whether a path carries an acceptable base filename.
///
/// The base name (the part after the last `/` or `\`) must be non-empty,
/// at most 255 bytes, free of characters Windows forbids in filenames, and
/// not a reserved device name. Applied to input paths and the `-o` output
/// path alike so a diff written on one host stays readable on another.
#[must_use]
pub fn is_valid_filename(path: &str) -> bool {
    let base = base_name(path);

    !(base.is_empty()
        || base.len() > MAX_BASE_NAME_LEN
        || base.contains(INVALID_CHARS)
        || RESERVED_NAMES
            .iter()
            .any(|reserved| base.eq_ignore_ascii_case(reserved)))
}

fn base_name(path: &str) -> &str {
    path.rfind(|c| c == '/' || c == '\\')
        .map_or(path, |pos| &path[pos + 1..])
}
