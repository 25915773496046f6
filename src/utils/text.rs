//! Keeps CSV rows on a single line.

/// Literal two-character `\n` used between flattened segments.
pub const NEWLINE_ESCAPE: &str = "\\n";
const CARRIAGE_RETURN_ESCAPE: &str = "\\r";

/// Replace real `\n` and `\r` characters with their two-character escapes.
#[must_use]
pub fn sanitize_new_lines(text: &str) -> String {
    text.replace('\n', NEWLINE_ESCAPE)
        .replace('\r', CARRIAGE_RETURN_ESCAPE)
}
