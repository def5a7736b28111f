//! Byte cursor over a sentinel-terminated buffer.
//!
//! EOF is detected when the current byte equals the sentinel (`0x00`) and
//! the position has reached the source length. A NUL at `pos < source_len`
//! is ordinary dump content.

/// Cursor over a sentinel-terminated source buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a position can be saved and restored cheaply.
///
/// # Invariant
///
/// `buf[source_len]` is `'\0'` and every byte after it is `'\0'` padding.
/// The cursor never moves past `source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize]
    }

    /// Advance by one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Returns `true` once the cursor has reached the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Extract `start..end` of the source.
    ///
    /// Both bounds must sit on char boundaries. The lexer only stops on an
    /// ASCII delimiter, the first char of a whitespace run, or the source
    /// length, so this holds for token boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Returns the char starting at the current position (`'\0'` at EOF).
    ///
    /// The position must sit on a char boundary, which every cursor
    /// movement preserves.
    #[inline]
    pub fn current_char(&self) -> char {
        let byte = self.current();
        if byte.is_ascii() {
            return char::from(byte);
        }
        self.buf[self.pos as usize..].chars().next().unwrap_or('\0')
    }

    /// Advance by one char.
    #[inline]
    #[allow(clippy::cast_possible_truncation, reason = "len_utf8 is at most 4")]
    fn bump_char(&mut self, c: char) {
        self.pos += c.len_utf8() as u32;
    }

    /// Advance past whitespace, Unicode spaces included.
    ///
    /// The sentinel is not whitespace, so the loop stops at EOF.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        loop {
            let c = self.current_char();
            if !c.is_whitespace() {
                break;
            }
            self.bump_char(c);
        }
    }

    /// Advance over a tag name: everything up to whitespace, `>` or EOF.
    pub fn eat_tag_name(&mut self) {
        while !self.is_eof() {
            let c = self.current_char();
            if c == '>' || c.is_whitespace() {
                break;
            }
            self.bump_char(c);
        }
    }

    /// Advance to the next `byte` using `memchr`.
    ///
    /// Returns `true` if found (cursor sits on it). Otherwise the cursor is
    /// left at EOF and `false` is returned.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> bool {
        let remaining = &self.buf.as_bytes()[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(byte, remaining) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }
}

#[cfg(test)]
mod tests;
