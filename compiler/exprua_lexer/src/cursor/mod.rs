//! Byte cursor over the borrowed source text.
//!
//! The cursor reads the caller's `&str` directly so token texts can borrow
//! from the original source. Reads at or past the end return `0x00`; use
//! [`Cursor::is_eof`] to tell EOF apart from an interior null byte.
//!
//! Matchers receive the cursor by value. It is [`Copy`], so a rule can scan
//! ahead freely and simply drop its copy when it declines to match.

/// Cursor over the source bytes, positioned at a char boundary.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self::at(src, 0)
    }

    /// Create a cursor at `pos`.
    ///
    /// # Contract
    ///
    /// `pos` must be `<= src.len()` and on a char boundary. The dispatcher
    /// only ever resumes at offsets produced by previous token boundaries.
    pub(crate) fn at(src: &'a str, pos: usize) -> Self {
        debug_assert!(
            src.is_char_boundary(pos),
            "cursor position {pos} is not a char boundary"
        );
        Self { src, pos }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.src.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Returns the full character at the current position.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        if !self.is_eof() {
            let width = Self::utf8_char_width(self.current());
            self.advance_n(width);
        }
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unread remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos.min(self.src.len())..]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} exceeds {}", self.pos);
        &self.src[start..self.pos]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Returns the number of bytes consumed. Stops at EOF regardless of
    /// what `pred(0)` returns.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// Returns the number of bytes consumed.
    pub fn eat_char_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.current_char() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.pos - start
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    ///
    /// Returns the number of bytes consumed.
    #[inline]
    pub fn eat_whitespace(&mut self) -> usize {
        self.eat_while(|b| b == b' ' || b == b'\t')
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// The newline itself is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Returns `true` if the current byte ends a line (`\n` or EOF).
    #[inline]
    pub fn at_line_end(&self) -> bool {
        self.is_eof() || self.current() == b'\n'
    }
}
