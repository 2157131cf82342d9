//! Lexer error type.
//!
//! The grammar has a single failure mode: a character that is not a space,
//! `+`, `-`, or an ASCII digit. The error records WHAT was found (`ch`) and
//! WHERE (`span`, covering the character's UTF-8 bytes).

use crate::Span;

/// An unrecognized character in the source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("can't tokenize {ch:?} at {span}")]
pub struct LexError {
    /// The offending character.
    pub ch: char,
    /// Byte range of `ch` in the source.
    pub span: Span,
}

impl LexError {
    pub fn unexpected_char(ch: char, span: Span) -> Self {
        LexError { ch, span }
    }
}

/// Result alias for scanning operations.
pub type Result<T, E = LexError> = std::result::Result<T, E>;
