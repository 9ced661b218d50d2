//! Core types for Sentiscope

/// Integer class code produced by a predictor
pub type LabelCode = i64;

/// Split raw input into trimmed, non-empty lines, preserving order.
///
/// Both `\n` and `\r\n` line endings are accepted.
pub fn extract_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
