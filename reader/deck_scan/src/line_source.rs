//! Physical line acquisition with true line-number tracking.

use crate::normalize::normalize;
use crate::SourceText;

/// Iterates the physical lines of a [`SourceText`].
///
/// The line counter increments for every physical line read, including
/// lines later discarded as blank or comment-only — error messages must
/// reference true physical position, not the position among surviving
/// lines.
pub struct LineSource<'src> {
    lines: std::str::Lines<'src>,
    line_number: u32,
}

impl<'src> LineSource<'src> {
    /// Create a line source positioned before the first line.
    pub fn new(source: &'src SourceText) -> Self {
        Self {
            lines: source.as_str().lines(),
            line_number: 0,
        }
    }

    /// The next physical line with its terminator stripped (`\n` and
    /// `\r\n` both accepted), or `None` at exhaustion.
    ///
    /// Increments the line counter unconditionally.
    pub fn next_physical(&mut self) -> Option<&'src str> {
        let raw = self.lines.next()?;
        self.line_number += 1;
        Some(raw)
    }

    /// The next *usable* line: loops physical lines through
    /// [`normalize`] until one survives comment and blank filtering.
    ///
    /// Returns the normalized line with its physical line number, or
    /// `None` once the source is exhausted.
    pub fn next_usable(&mut self) -> Option<(&'src str, u32)> {
        loop {
            let raw = self.next_physical()?;
            if let Some(line) = normalize(raw) {
                return Some((line, self.line_number));
            }
        }
    }

    /// Number of the most recently read physical line (1-based; 0
    /// before the first read).
    pub fn line_number(&self) -> u32 {
        self.line_number
    }
}
