//! Tokenizer for single-digit arithmetic expressions.
//!
//! Converts text such as `"3 + 5"` into a sequence of [`Token`]s ending in
//! exactly one [`Token::EndOfInput`]. The grammar is deliberately tiny:
//!
//! ```text
//! token   = digit | "+" | "-"
//! digit   = "0" ... "9"
//! trivia  = " "            (U+0020 only)
//! ```
//!
//! Every digit is its own token: `"42"` scans as `Integer(4)`, `Integer(2)`.
//! Any other character is a [`LexError`].
//!
//! # Layers
//!
//! - [`Cursor`]: forward-only read head over the source text
//! - [`Scanner`]: pull-based tokenizer, one [`Token`] per call
//! - [`Tokens`]: lazy, single-pass, fused sequence over a scanner
//!
//! ```
//! use calc_lexer::{tokenize, Token};
//!
//! let tokens = tokenize("3 - 6").unwrap();
//! assert_eq!(
//!     tokens,
//!     [Token::Integer(3), Token::Minus, Token::Integer(6), Token::EndOfInput]
//! );
//! ```

mod cursor;
mod lex_error;
mod scanner;
mod span;
mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, Result};
pub use scanner::{tokenize, Scanner, Tokens};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
