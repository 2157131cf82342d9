//! Forward-only cursor over the source text.
//!
//! The cursor tracks a byte offset into a `&str` and only ever moves
//! forward. It always rests on a UTF-8 character boundary, so
//! [`Cursor::current`] can decode the next character without validation.
//!
//! # Whitespace
//!
//! Only U+0020 SPACE is trivia. Tabs, newlines and carriage returns are
//! ordinary characters to the cursor and are rejected by the scanner.

/// Forward-only read head over source text.
///
/// Created via [`Cursor::new`]. The cursor is [`Copy`], so a snapshot can be
/// taken before speculative reads.
///
/// # Invariant
///
/// `pos <= source.len()`, `pos` never decreases, and `pos` is always a
/// character boundary of `source`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(ch) = self.current() {
            self.pos += ch.len_utf8();
        }
    }

    /// Advance past consecutive spaces (`0x20` only).
    #[inline]
    pub fn eat_spaces(&mut self) {
        let bytes = self.source.as_bytes();
        while bytes.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }
    }

    /// Returns `true` if the cursor has consumed the whole source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract the source text from `start` to the current position.
    ///
    /// # Contract
    ///
    /// `start` must be a character boundary at or before [`pos()`](Self::pos).
    /// Offsets previously returned by `pos()` always qualify.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} exceeds {}", self.pos);
        &self.source[start..self.pos]
    }
}
