//! Comment stripping and whitespace trimming for physical lines.

/// The comment marker byte. Everything from the first `!` to the end of
/// the line is comment text.
const COMMENT_MARKER: u8 = b'!';

/// Normalize one physical line: strip any `!` comment, then trim
/// leading and trailing whitespace.
///
/// Returns `None` when nothing survives — the line was blank or
/// comment-only — and the caller moves on to the next physical line.
/// A marker at column 0 leaves an empty prefix, so full-line comments
/// are handled by the same truncation rule as trailing comments.
///
/// The output is guaranteed non-empty, comment-free, and trimmed.
pub fn normalize(raw: &str) -> Option<&str> {
    let content = match memchr::memchr(COMMENT_MARKER, raw.as_bytes()) {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests;
