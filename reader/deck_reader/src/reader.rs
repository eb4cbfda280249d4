//! The token cursor and its typed accessors.

use std::collections::VecDeque;

use deck_scan::{tokenize, LineSource, SourceText, Token};
use tracing::trace;

use crate::error::ReadError;

/// Parse a base-10 integer: optional leading sign, no separators,
/// invariant.
fn parse_int(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// Parse a double: invariant `.` decimal point, optional exponent and
/// sign.
fn parse_double(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Parse a boolean literal: case-insensitive `true`/`false`.
fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Cursor over the token stream of one deck source.
///
/// The reader owns the per-line pending queue and the cursor for its
/// lifetime; it borrows the [`SourceText`] and cannot outlive it. Two
/// logical states: **active** (`current` holds a token) and
/// **exhausted** (`current` is `None`, terminal — there is no reset or
/// seek). Construction advances once so the first token is pre-loaded.
///
/// Not internally synchronized; a reader instance belongs to one
/// execution context at a time.
pub struct TokenReader<'src> {
    lines: LineSource<'src>,
    /// Tokens of the current line not yet consumed. Strictly FIFO;
    /// refilled only when empty.
    pending: VecDeque<Token<'src>>,
    current: Option<Token<'src>>,
    /// Physical line of `current`, or of the last line read once
    /// exhausted. Monotonically non-decreasing.
    line_number: u32,
}

impl<'src> TokenReader<'src> {
    /// Create a reader over `source` with the first token pre-loaded.
    pub fn new(source: &'src SourceText) -> Self {
        let mut reader = Self {
            lines: LineSource::new(source),
            pending: VecDeque::new(),
            current: None,
            line_number: 0,
        };
        reader.advance();
        reader
    }

    /// The current token, or `None` once the input is exhausted.
    pub fn current(&self) -> Option<Token<'src>> {
        self.current
    }

    /// Physical line number of the current token, or of the last line
    /// read once exhausted (0 if the input held no lines at all).
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// `true` once the input is exhausted. Terminal: no operation can
    /// make the reader active again.
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Load the next token, or enter the terminal exhausted state.
    ///
    /// Drains the pending queue first; only when it is empty is the
    /// next usable line requested and tokenized. A usable line is
    /// non-empty, so the refill always yields a token.
    fn advance(&mut self) {
        if self.pending.is_empty() {
            if let Some((line, number)) = self.lines.next_usable() {
                tokenize(line, number, &mut self.pending);
            }
        }
        self.current = self.pending.pop_front();
        match self.current {
            Some(token) => {
                self.line_number = token.line();
                trace!(line = token.line(), text = token.text(), "advance");
            }
            None => {
                self.line_number = self.lines.line_number();
                trace!(line = self.line_number, "advance to end of input");
            }
        }
    }

    // === Match / expect primitives ===

    /// Unconditionally advance past the current token, discarding it.
    pub fn ignore(&mut self) {
        self.advance();
    }

    /// Probe: if the current token matches `expected` (ASCII
    /// case-insensitive), advance and return `true`; otherwise leave
    /// the cursor unchanged. Always `false` once exhausted.
    pub fn eat(&mut self, expected: &str) -> bool {
        match self.current {
            Some(token) if token.is(expected) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Probe: the index of the first option matching the current token,
    /// advancing on success; `None` (no advance) when nothing matches.
    pub fn eat_any(&mut self, options: &[&str]) -> Option<usize> {
        let token = self.current?;
        let index = options.iter().position(|kw| token.is(kw))?;
        self.advance();
        Some(index)
    }

    /// Commit: like [`eat`](Self::eat), but a mismatch raises
    /// [`ExpectedButFound`](crate::ReadErrorKind::ExpectedButFound).
    pub fn expect(&mut self, expected: &str) -> Result<(), ReadError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.expect_error(format!("`{expected}`")))
        }
    }

    /// Commit: the index of the first matching option, advancing; no
    /// match raises an error listing all candidates.
    pub fn expect_any(&mut self, options: &[&str]) -> Result<usize, ReadError> {
        match self.eat_any(options) {
            Some(index) => Ok(index),
            None => Err(self.expect_any_error(options)),
        }
    }

    // === Typed value parsing ===

    /// Probe: parse the current token as an integer into a fresh
    /// output. Advances only on success.
    pub fn try_read_int(&mut self) -> Option<i64> {
        self.try_read_with(parse_int)
    }

    /// Probe with duplicate-assignment guard: refuses to parse — `false`
    /// with no advance — when `dest` already holds a value, leaving the
    /// token available for the caller to turn into a duplicate-token
    /// error. Otherwise parses like [`try_read_int`](Self::try_read_int),
    /// storing the value on success.
    pub fn try_read_int_into(&mut self, dest: &mut Option<i64>) -> bool {
        self.try_read_into_with(parse_int, dest)
    }

    /// Parse the current token as an integer, or return `default`
    /// without advancing — the token stays current for a following
    /// `eat`/`expect`.
    pub fn read_int_or(&mut self, default: i64) -> i64 {
        self.try_read_with(parse_int).unwrap_or(default)
    }

    /// Commit: parse the current token as an integer or raise.
    pub fn read_int(&mut self) -> Result<i64, ReadError> {
        self.read_with(parse_int, "an integer")
    }

    /// Commit: a comma-separated run of integers, zero or more
    /// elements.
    pub fn read_int_list(&mut self) -> Result<Vec<i64>, ReadError> {
        self.read_list_with(parse_int, "an integer")
    }

    /// Probe: parse the current token as a double into a fresh output.
    /// Advances only on success.
    pub fn try_read_double(&mut self) -> Option<f64> {
        self.try_read_with(parse_double)
    }

    /// Probe with duplicate-assignment guard; see
    /// [`try_read_int_into`](Self::try_read_int_into).
    pub fn try_read_double_into(&mut self, dest: &mut Option<f64>) -> bool {
        self.try_read_into_with(parse_double, dest)
    }

    /// Parse the current token as a double, or return `default` without
    /// advancing.
    pub fn read_double_or(&mut self, default: f64) -> f64 {
        self.try_read_with(parse_double).unwrap_or(default)
    }

    /// Commit: parse the current token as a double or raise.
    pub fn read_double(&mut self) -> Result<f64, ReadError> {
        self.read_with(parse_double, "a number")
    }

    /// Commit: a comma-separated run of doubles, zero or more elements.
    pub fn read_double_list(&mut self) -> Result<Vec<f64>, ReadError> {
        self.read_list_with(parse_double, "a number")
    }

    /// Probe: parse the current token as a boolean into a fresh output.
    /// Advances only on success.
    pub fn try_read_bool(&mut self) -> Option<bool> {
        self.try_read_with(parse_bool)
    }

    /// Probe with duplicate-assignment guard; see
    /// [`try_read_int_into`](Self::try_read_int_into).
    pub fn try_read_bool_into(&mut self, dest: &mut Option<bool>) -> bool {
        self.try_read_into_with(parse_bool, dest)
    }

    /// Parse the current token as a boolean, or return `default`
    /// without advancing.
    pub fn read_bool_or(&mut self, default: bool) -> bool {
        self.try_read_with(parse_bool).unwrap_or(default)
    }

    /// Commit: parse the current token as a boolean or raise.
    pub fn read_bool(&mut self) -> Result<bool, ReadError> {
        self.read_with(parse_bool, "a boolean")
    }

    /// Commit: a comma-separated run of booleans, zero or more
    /// elements.
    pub fn read_bool_list(&mut self) -> Result<Vec<bool>, ReadError> {
        self.read_list_with(parse_bool, "a boolean")
    }

    /// Commit: the raw text of the current token, advancing past it.
    /// The only failure is exhausted input.
    pub fn read_str(&mut self) -> Result<&'src str, ReadError> {
        match self.current {
            Some(token) => {
                self.advance();
                Ok(token.text())
            }
            None => Err(self.expect_error("a token".to_owned())),
        }
    }

    // === Error construction for the consumer's grammar loop ===

    /// Error for a token no grammar alternative recognizes, referencing
    /// the current token and line.
    #[cold]
    pub fn unexpected_token(&self) -> ReadError {
        ReadError::unexpected_token(self.current.map(|t| t.text()), self.line_number)
    }

    /// Error for a field or keyword recognized twice within a scope
    /// that forbids repetition, referencing the current token and line.
    #[cold]
    pub fn duplicate_token(&self) -> ReadError {
        ReadError::duplicate_token(self.current.map(|t| t.text()), self.line_number)
    }

    /// Enforce a required field at the end of a record: raises
    /// [`RequiredFieldMissing`](crate::ReadErrorKind::RequiredFieldMissing)
    /// naming `name` when `value` is still unset.
    pub fn require_set<T>(&self, value: &Option<T>, name: &str) -> Result<(), ReadError> {
        if value.is_some() {
            Ok(())
        } else {
            Err(ReadError::required_field_missing(name, self.line_number))
        }
    }

    // === Internals ===

    /// Parse the current token with `parse`, advancing only on success.
    fn try_read_with<T>(&mut self, parse: fn(&str) -> Option<T>) -> Option<T> {
        let value = parse(self.current?.text())?;
        self.advance();
        Some(value)
    }

    /// Commit wrapper around [`try_read_with`](Self::try_read_with):
    /// failure raises an error naming the expected value kind.
    fn read_with<T>(&mut self, parse: fn(&str) -> Option<T>, kind: &str) -> Result<T, ReadError> {
        match self.try_read_with(parse) {
            Some(value) => Ok(value),
            None => Err(self.expect_error(kind.to_owned())),
        }
    }

    /// Comma-separated run of values: stop at exhaustion, raise when an
    /// element fails to parse, stop after any element not followed by a
    /// comma. A trailing comma at end of input terminates the list with
    /// the elements accumulated so far.
    fn read_list_with<T>(
        &mut self,
        parse: fn(&str) -> Option<T>,
        kind: &str,
    ) -> Result<Vec<T>, ReadError> {
        let mut values = Vec::new();
        while !self.is_at_end() {
            values.push(self.read_with(parse, kind)?);
            if !self.eat(",") {
                break;
            }
        }
        Ok(values)
    }

    /// Duplicate-assignment guard shared by the `try_read_*_into`
    /// probes: a destination that already holds a value refuses the
    /// parse outright, before the token is touched.
    fn try_read_into_with<T>(
        &mut self,
        parse: fn(&str) -> Option<T>,
        dest: &mut Option<T>,
    ) -> bool {
        if dest.is_some() {
            return false;
        }
        match self.try_read_with(parse) {
            Some(value) => {
                *dest = Some(value);
                true
            }
            None => false,
        }
    }

    /// Build the error for a failed commit, naming what was required.
    #[cold]
    #[inline(never)]
    fn expect_error(&self, expected: String) -> ReadError {
        ReadError::expected_but_found(
            expected,
            self.current.map(|t| t.text()),
            self.line_number,
        )
    }

    /// Build the error for a failed [`expect_any`](Self::expect_any),
    /// listing every candidate.
    #[cold]
    #[inline(never)]
    fn expect_any_error(&self, options: &[&str]) -> ReadError {
        let list = options
            .iter()
            .map(|kw| format!("`{kw}`"))
            .collect::<Vec<_>>()
            .join(", ");
        self.expect_error(format!("one of {list}"))
    }
}
