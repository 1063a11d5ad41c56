//! Codepoint cursor with single-step backup.
//!
//! The cursor tracks two boundaries into its input: `start`, the first byte
//! not yet covered by an emitted item, and `pos`, the next byte to read. The
//! bytes between them are the *pending* text that the next emit will cover.
//!
//! # Backup
//!
//! [`read_next()`](Cursor::read_next) records the encoded width of the
//! codepoint it consumed, and [`backup()`](Cursor::backup) rewinds `pos` by
//! exactly that width. The width is cleared by the backup, so only one step
//! can ever be undone. A second backup without an intervening read is a
//! debug assertion failure and a no-op in release builds.

use memchr::memmem;

use crate::Span;

/// Cursor over a borrowed `&str`.
///
/// The cursor is [`Copy`], so a state can snapshot it before speculative
/// reads. Invariant: `start <= pos <= input.len()`, and both boundaries sit
/// on UTF-8 character boundaries.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    /// First byte of the pending (unemitted) text.
    start: usize,
    /// Next byte to read.
    pos: usize,
    /// Width of the last codepoint read; `None` before the first read and
    /// after a backup. `Some(0)` after a read that hit end of input.
    width: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at byte 0 with nothing pending.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: None,
        }
    }

    /// Consume and return the next codepoint.
    ///
    /// Returns `None` at end of input without advancing; the recorded width
    /// is then zero, so a following [`backup()`](Self::backup) is harmless.
    #[inline]
    pub fn read_next(&mut self) -> Option<char> {
        let Some(c) = self.remaining().chars().next() else {
            self.width = Some(0);
            return None;
        };
        let width = c.len_utf8();
        self.width = Some(width);
        self.pos += width;
        Some(c)
    }

    /// Undo the most recent [`read_next()`](Self::read_next).
    #[inline]
    pub fn backup(&mut self) {
        debug_assert!(
            self.width.is_some(),
            "backup() at byte {} without a preceding read_next()",
            self.pos
        );
        self.pos -= self.width.take().unwrap_or(0);
    }

    /// Return the next codepoint without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        let c = self.read_next();
        self.backup();
        c
    }

    /// Drop the pending text without emitting it.
    #[inline]
    pub fn discard(&mut self) {
        self.start = self.pos;
    }

    /// Consume the next codepoint if `valid` accepts it.
    ///
    /// End of input is never accepted.
    pub fn accept(&mut self, valid: impl Fn(char) -> bool) -> bool {
        if matches!(self.read_next(), Some(c) if valid(c)) {
            true
        } else {
            self.backup();
            false
        }
    }

    /// Consume codepoints while `valid` accepts them.
    ///
    /// The first rejected codepoint (or end of input) is left unconsumed.
    pub fn accept_run(&mut self, valid: impl Fn(char) -> bool) {
        while matches!(self.read_next(), Some(c) if valid(c)) {}
        self.backup();
    }

    /// Returns `true` if the unread input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Advance over `len` bytes of known content, such as a delimiter that
    /// [`starts_with()`](Self::starts_with) has already matched.
    ///
    /// Clears the backup width: a fixed-length step cannot be undone.
    pub fn advance(&mut self, len: usize) {
        let end = (self.pos + len).min(self.input.len());
        debug_assert!(
            self.input.is_char_boundary(end),
            "advance({len}) from byte {} splits a codepoint",
            self.pos
        );
        self.pos = end;
        self.width = None;
    }

    /// Advance to the next occurrence of `needle`, or to end of input.
    ///
    /// Returns `true` if the needle was found; the cursor then sits on its
    /// first byte. Uses `memchr::memmem` instead of reading codepoint by
    /// codepoint. Clears the backup width.
    pub fn skip_to(&mut self, needle: &str) -> bool {
        self.width = None;
        if let Some(offset) = memmem::find(self.remaining().as_bytes(), needle.as_bytes()) {
            self.pos += offset;
            true
        } else {
            self.pos = self.input.len();
            false
        }
    }

    /// Returns `true` if there is pending text between `start` and `pos`.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pos > self.start
    }

    /// The pending text `input[start..pos]`.
    #[inline]
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Span of the pending text.
    #[inline]
    pub fn pending_span(&self) -> Span {
        Span::from_offsets(self.start, self.pos)
    }

    /// Take the pending text and move `start` up to `pos`.
    pub fn take_pending(&mut self) -> (Span, &'a str) {
        let taken = (self.pending_span(), self.pending());
        self.start = self.pos;
        taken
    }

    /// Span of the codepoint consumed by the last read.
    ///
    /// Empty (at `pos`) after a read that hit end of input, or once the
    /// read has been backed up.
    pub fn last_read_span(&self) -> Span {
        let width = self.width.unwrap_or(0);
        Span::from_offsets(self.pos - width, self.pos)
    }

    /// The unread input `input[pos..]`.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Byte offset of the first pending byte.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the next byte to read.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The full input the cursor was created over.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }
}
