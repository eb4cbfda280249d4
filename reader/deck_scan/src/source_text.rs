//! Owned source storage for deck text.
//!
//! `SourceText` owns the full decoded source; every scanner and reader
//! borrows `&'src str` slices from it and cannot outlive it. Dropping
//! the `SourceText` is the deterministic release of the underlying
//! characters.
//!
//! # File Decoding
//!
//! Deck files are single-byte fixed-width text: each byte is one
//! character. [`SourceText::read_path`] therefore decodes bytes
//! `0x80..=0xFF` as `U+0080..=U+00FF` (Latin-1) rather than rejecting
//! them, so legacy decks with vendor extension characters load without
//! loss. The file handle is scoped to the call and closed before it
//! returns.

use std::fs;
use std::io;
use std::path::Path;

/// Owned deck source text.
#[derive(Clone, Debug)]
pub struct SourceText {
    text: String,
}

impl SourceText {
    /// Create a source from an in-memory text blob.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a file as single-byte fixed-width text.
    ///
    /// Every byte becomes exactly one character, so physical column
    /// arithmetic in the deck stays exact regardless of content.
    pub fn read_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self {
            text: decode_single_byte(bytes),
        })
    }

    /// The full source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the source in characters (= bytes of the original file
    /// for sources loaded via [`read_path`](Self::read_path)).
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Decode bytes as single-byte fixed-width text (Latin-1).
///
/// ASCII-only input takes the zero-copy path; any byte `>= 0x80` forces
/// a widening re-encode, since such bytes are not valid UTF-8 on their
/// own.
fn decode_single_byte(bytes: Vec<u8>) -> String {
    if bytes.is_ascii() {
        match String::from_utf8(bytes) {
            Ok(text) => text,
            // Unreachable for ASCII input, but decode losslessly anyway.
            Err(err) => err.into_bytes().iter().map(|&b| char::from(b)).collect(),
        }
    } else {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}
