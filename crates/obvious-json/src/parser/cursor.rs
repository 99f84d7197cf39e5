//! Read position over immutable source text.
//!
//! A [`Cursor`] is a plain value: a shared `&str` plus a byte offset. Copying
//! it is how a rule branches, so moving a derived cursor never disturbs the
//! one it was copied from.

use core::fmt;

/// A read position into borrowed source text.
///
/// Positions are byte offsets. Every method that moves the cursor expects to
/// land on a `char` boundary; the rules only ever advance past characters they
/// have inspected, which keeps that true.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'src> {
    text: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self { text, pos: 0 }
    }

    /// Creates a cursor at byte offset `pos` of `text`.
    ///
    /// `pos` must be a `char` boundary of `text`; debug builds assert it.
    #[must_use]
    pub fn at(text: &'src str, pos: usize) -> Self {
        debug_assert!(text.is_char_boundary(pos));
        Self { text, pos }
    }

    /// Byte offset of the read position. After a successful parse this is the
    /// length of input consumed.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The whole source text.
    #[must_use]
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Unread input from the current position on.
    #[must_use]
    pub fn remaining(&self) -> &'src str {
        self.text.get(self.pos..).unwrap_or_default()
    }

    /// The character at the read position, or `None` once the input is
    /// exhausted.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Whether a character can be read at the current position.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.pos < self.text.len()
    }

    /// Whether the unread input starts with `literal`. Never moves the cursor.
    #[must_use]
    pub fn at_literal(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Moves forward by `n` bytes.
    ///
    /// No bounds check is made; callers advance only over input they have
    /// already seen. The new position must be a `char` boundary; debug
    /// builds assert it.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.text.is_char_boundary(self.pos));
    }

    /// Moves past the character at the read position, returning it.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.head()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Returns up to `n` bytes of unread input and moves past them.
    ///
    /// Near the end of input the slice is shorter than `n`. If `n` bytes would
    /// split a character, nothing is consumed and an empty slice is returned.
    pub fn take(&mut self, n: usize) -> &'src str {
        let end = (self.pos + n).min(self.text.len());
        match self.text.get(self.pos..end) {
            Some(s) => {
                self.pos = end;
                s
            }
            None => "",
        }
    }

    /// An independent copy at the same position.
    #[inline]
    #[must_use]
    pub fn branch(&self) -> Self {
        *self
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 16;
        let rest = self.remaining();
        let cut = rest
            .char_indices()
            .nth(PREVIEW)
            .map_or(rest.len(), |(i, _)| i);
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.text.len())
            .field("ahead", &&rest[..cut])
            .finish()
    }
}
