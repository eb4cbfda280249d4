//! Typed, fail-fast token reader for deck-format text.
//!
//! Built on [`deck_scan`]'s line scanner, [`TokenReader`] exposes the
//! "current token" cursor together with two families of primitives:
//!
//! - **Probes** ([`eat`](TokenReader::eat), [`eat_any`](TokenReader::eat_any),
//!   the `try_read_*` methods) report success or failure without ever
//!   constructing an error, letting a record parser try alternatives.
//! - **Commits** ([`expect`](TokenReader::expect),
//!   [`expect_any`](TokenReader::expect_any), the `read_*` methods)
//!   raise a fatal [`ReadError`] when the grammar's expectation is
//!   violated.
//!
//! All errors are fatal at the point raised: the reader is single-pass
//! and non-resumable, and the only recovery boundary is the caller
//! presenting the line number and message to the user.
//!
//! A domain record parser drives the reader in a keyword loop: try each
//! known keyword with `eat`, pull typed fields inside the matching
//! branch, finish the record with
//! [`require_set`](TokenReader::require_set), and turn an unrecognized
//! token into [`unexpected_token`](TokenReader::unexpected_token).

mod error;
mod reader;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

pub use deck_scan::{SourceText, Token};
pub use error::{ReadError, ReadErrorKind};
pub use reader::TokenReader;
