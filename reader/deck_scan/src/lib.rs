//! Low-level scanning for line-oriented deck-format text.
//!
//! A deck file is a sequence of physical lines. `!` starts a comment:
//! a full-line comment when it sits at column 0, a trailing comment
//! otherwise. Blank and comment-only lines are skipped entirely. Each
//! surviving line is split into tokens on runs of whitespace, with `:`,
//! `=`, and `,` always forming standalone single-character tokens
//! regardless of surrounding spacing (`NCTRL=4` yields `NCTRL`, `=`, `4`).
//!
//! The pipeline is [`SourceText`] (owned storage) → [`LineSource`]
//! (physical line acquisition with true line-number tracking) →
//! [`normalize`] (comment stripping and trimming) → [`tokenize`]
//! (token splitting). All scanning output borrows `&'src str` slices
//! from the `SourceText`; nothing in this crate allocates per token.

mod line_source;
mod normalize;
mod source_text;
mod token;
mod tokenize;

pub use line_source::LineSource;
pub use normalize::normalize;
pub use source_text::SourceText;
pub use token::Token;
pub use tokenize::tokenize;
