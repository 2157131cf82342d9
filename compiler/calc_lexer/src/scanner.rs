//! Pull-based scanner producing one [`Token`] per call.
//!
//! The scanner wraps a [`Cursor`] and a single `done` flag. It does no
//! lookahead and never merges characters: every non-space character is
//! classified on its own.
//!
//! # State
//!
//! `Scanning` until the first [`Token::EndOfInput`] is returned, `Done`
//! afterwards. In `Done` every call returns `EndOfInput` again without
//! moving the cursor.
//!
//! # Errors
//!
//! [`Scanner::next_token`] is resumable: the bad character has already been
//! consumed when the [`LexError`] is returned, so calling again continues
//! with the rest of the input. [`Tokens`] is not: it yields the error once
//! and then ends.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::lex_error::{LexError, Result};
use crate::span::Span;
use crate::token::Token;

/// Tokenizer over a borrowed source string.
///
/// Single-owner and forward-only; re-scanning requires a fresh `Scanner`.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Set once `EndOfInput` has been produced.
    done: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            done: false,
        }
    }

    /// Produce the next token.
    ///
    /// Skips spaces, then classifies exactly one character. Returns
    /// [`Token::EndOfInput`] when the source is exhausted, and keeps
    /// returning it on subsequent calls.
    pub fn next_token(&mut self) -> Result<Token> {
        self.cursor.eat_spaces();
        let start = self.cursor.pos();

        let Some(ch) = self.cursor.current() else {
            return Ok(self.eof());
        };
        self.cursor.advance_char();

        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            _ => match Token::digit(ch) {
                Some(token) => token,
                None => return Err(self.unexpected_char(ch, start)),
            },
        };

        trace!(
            pos = start,
            kind = %token.kind(),
            lexeme = self.cursor.slice_from(start),
            "token"
        );
        Ok(token)
    }

    /// Current byte offset into the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns `true` once `EndOfInput` has been produced.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Consume the scanner into a lazy token sequence.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            scanner: self,
            finished: false,
        }
    }

    fn eof(&mut self) -> Token {
        debug_assert!(self.cursor.is_eof());
        if !self.done {
            trace!(pos = self.cursor.pos(), "end of input");
            self.done = true;
        }
        Token::EndOfInput
    }

    fn unexpected_char(&self, ch: char, start: usize) -> LexError {
        let span = Span::saturating_from_range(start..self.cursor.pos());
        debug!(?ch, %span, "unexpected character");
        LexError::unexpected_char(ch, span)
    }
}

impl<'a> IntoIterator for Scanner<'a> {
    type Item = Result<Token>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

/// Lazy, single-pass token sequence.
///
/// Yields `Ok` for every token up to and including the first
/// [`Token::EndOfInput`], then `None`. If scanning fails, yields the
/// `Err` once and then `None`, so collecting into
/// `Result<Vec<Token>, LexError>` never silently truncates.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
    finished: bool,
}

impl Tokens<'_> {
    /// Current byte offset of the underlying scanner.
    pub fn pos(&self) -> usize {
        self.scanner.pos()
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.scanner.next_token();
        // Stop after EndOfInput or the first error.
        self.finished = !matches!(result, Ok(token) if !token.is_eof());
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        // At least EndOfInput; at most one token per remaining byte plus it.
        let remaining = self.scanner.cursor.source_len() - self.scanner.pos();
        (1, remaining.checked_add(1))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Scan `source` to completion.
///
/// Returns every token including the trailing [`Token::EndOfInput`], or the
/// first [`LexError`].
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).tokens().collect()
}
