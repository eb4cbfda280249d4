//! Read error types.
//!
//! Every error carries WHAT went wrong ([`ReadErrorKind`], with the
//! offending token text or the expected-text description) and WHERE
//! (the physical line the cursor stood on when the error was raised).
//! Probe primitives never construct this type; commit primitives
//! propagate it with `?`.

use std::fmt;

/// A fatal read error, tagged with the physical line the cursor stood
/// on when it was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadError {
    /// What went wrong.
    pub kind: ReadErrorKind,
    /// Physical line number (1-based; 0 when the input held no usable
    /// lines at all).
    pub line: u32,
}

/// What kind of read error occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadErrorKind {
    /// A specific token or value kind was required and something else
    /// was found. `found` is `None` once the input is exhausted.
    ExpectedButFound {
        /// Display-ready description of what was required: a quoted
        /// keyword, a value kind, or a joined candidate list.
        expected: String,
        /// The offending token text, if any.
        found: Option<String>,
    },
    /// No grammar alternative recognized the current token.
    UnexpectedToken {
        /// The unrecognized token text; `None` once exhausted.
        token: Option<String>,
    },
    /// A field or keyword was supplied twice within a scope that
    /// forbids repetition.
    DuplicateToken {
        /// The token the cursor stood on when the duplicate was found.
        token: Option<String>,
    },
    /// A required field was still unset at the end of a record.
    RequiredFieldMissing {
        /// The field name as the record grammar knows it.
        name: String,
    },
}

impl ReadError {
    /// A required token or value kind was not found.
    #[cold]
    pub fn expected_but_found(
        expected: impl Into<String>,
        found: Option<&str>,
        line: u32,
    ) -> Self {
        Self {
            kind: ReadErrorKind::ExpectedButFound {
                expected: expected.into(),
                found: found.map(str::to_owned),
            },
            line,
        }
    }

    /// No grammar alternative recognized the token.
    #[cold]
    pub fn unexpected_token(token: Option<&str>, line: u32) -> Self {
        Self {
            kind: ReadErrorKind::UnexpectedToken {
                token: token.map(str::to_owned),
            },
            line,
        }
    }

    /// A field or keyword was recognized twice within one scope.
    #[cold]
    pub fn duplicate_token(token: Option<&str>, line: u32) -> Self {
        Self {
            kind: ReadErrorKind::DuplicateToken {
                token: token.map(str::to_owned),
            },
            line,
        }
    }

    /// A required field was missing at the end of a record.
    #[cold]
    pub fn required_field_missing(name: impl Into<String>, line: u32) -> Self {
        Self {
            kind: ReadErrorKind::RequiredFieldMissing { name: name.into() },
            line,
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ReadErrorKind::ExpectedButFound {
                expected,
                found: Some(found),
            } => {
                write!(f, "expected {expected}, found `{found}`")
            }
            ReadErrorKind::ExpectedButFound {
                expected,
                found: None,
            } => {
                write!(f, "expected {expected}, found end of input")
            }
            ReadErrorKind::UnexpectedToken { token: Some(token) } => {
                write!(f, "unexpected token `{token}`")
            }
            ReadErrorKind::UnexpectedToken { token: None } => {
                write!(f, "unexpected end of input")
            }
            ReadErrorKind::DuplicateToken { token: Some(token) } => {
                write!(f, "duplicate token `{token}`")
            }
            ReadErrorKind::DuplicateToken { token: None } => {
                write!(f, "duplicate token at end of input")
            }
            ReadErrorKind::RequiredFieldMissing { name } => {
                write!(f, "required field `{name}` is missing")
            }
        }
    }
}

impl std::error::Error for ReadError {}
