//! Token types produced by the [`Scanner`](crate::Scanner).

use std::fmt;

/// The closed set of token categories.
///
/// Fieldless mirror of [`Token`] for callers that only need to branch on the
/// category, such as diagnostics and logging.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Plus,
    Minus,
    EndOfInput,
}

impl TokenKind {
    /// Short lowercase name used in token listings and log fields.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Integer => "int",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::EndOfInput => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A scanned token.
///
/// Only `Integer` carries a value, and that value is always a single decimal
/// digit (`0..=9`). Multi-digit runs are never merged: `"12"` scans as
/// `Integer(1)` followed by `Integer(2)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single decimal digit.
    Integer(u8),
    Plus,
    Minus,
    /// End of input. Emitted once the source is exhausted, and again on
    /// every later request.
    EndOfInput,
}

const _: () = assert!(std::mem::size_of::<Token>() == 2);

impl Token {
    /// Build an `Integer` token from an ASCII decimal digit.
    ///
    /// Returns `None` for anything other than `'0'..='9'`.
    pub fn digit(ch: char) -> Option<Token> {
        ch.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Token::Integer)
    }

    #[inline]
    pub fn kind(self) -> TokenKind {
        match self {
            Token::Integer(_) => TokenKind::Integer,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// The digit value, present only for `Integer` tokens.
    #[inline]
    pub fn value(self) -> Option<u8> {
        match self {
            Token::Integer(v) => Some(v),
            Token::Plus | Token::Minus | Token::EndOfInput => None,
        }
    }

    #[inline]
    pub fn is_eof(self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}

/// Renders as `kind, value`, e.g. `int, 3` or `plus, None`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}, {v}", self.kind()),
            None => write!(f, "{}, None", self.kind()),
        }
    }
}
