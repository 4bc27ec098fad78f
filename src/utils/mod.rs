/// Line reading and trailing-newline detection
pub mod fs;
/// Filename validation for input and output paths
pub mod paths;
/// Modification-time formatting for diff headers
pub mod timestamps;
