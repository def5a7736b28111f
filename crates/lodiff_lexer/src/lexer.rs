//! Pull-based layout dump lexer.
//!
//! # Grammar
//!
//! ```text
//! <name param...>   Open   name: up to whitespace or '>', param: trimmed rest
//! </name ...>       Close  anything after the name is ignored
//! <?name ...>       processing instruction, skipped
//! text              Value  up to the next '<' or EOF, trimmed
//! ```
//!
//! Whitespace between tokens is insignificant.

use crate::{Cursor, LexError, LexErrorKind, SourceBuffer, Token};

/// Tokenizer over one loaded dump.
///
/// Each call to [`next_token`](Self::next_token) produces the next real
/// token; processing instructions and whitespace never surface.
pub struct LayoutLexer<'a> {
    source: &'a SourceBuffer,
    cursor: Cursor<'a>,
    /// Line number at byte `line_pos`, advanced after every token so
    /// [`line`](Self::line) only counts the breaks since the last one.
    line: u32,
    line_pos: u32,
}

impl<'a> LayoutLexer<'a> {
    pub fn new(source: &'a SourceBuffer) -> Self {
        Self {
            source,
            cursor: source.cursor(),
            line: 1,
            line_pos: 0,
        }
    }

    /// Produce the next token.
    ///
    /// Returns [`Token::Eof`] when the source is exhausted, and keeps
    /// returning it on subsequent calls.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        let token = self.scan();
        self.line = self.line();
        self.line_pos = self.cursor.pos();
        token
    }

    fn scan(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            self.cursor.eat_whitespace();
            if self.cursor.is_eof() {
                return Ok(Token::Eof);
            }
            if self.cursor.current() != b'<' {
                return Ok(self.value());
            }

            self.cursor.advance(); // consume '<'
            if self.cursor.is_eof() {
                return Err(self.error(LexErrorKind::TruncatedTag));
            }
            let marker = self.cursor.current();
            if matches!(marker, b'?' | b'/') {
                self.cursor.advance();
            }

            let name = self.tag_name()?;
            let param = self.tag_param()?;
            match marker {
                b'?' => {}
                b'/' => return Ok(Token::Close { name }),
                _ => return Ok(Token::Open { name, param }),
            }
        }
    }

    /// Line number of the current position, for diagnostics.
    pub fn line(&self) -> u32 {
        let breaks = self
            .source
            .breaks_between(self.line_pos, self.cursor.pos());
        self.line.saturating_add(breaks)
    }

    fn tag_name(&mut self) -> Result<&'a str, LexError> {
        let start = self.cursor.pos();
        self.cursor.eat_tag_name();
        if self.cursor.pos() == start {
            let kind = if self.cursor.is_eof() {
                LexErrorKind::TruncatedTag
            } else {
                LexErrorKind::MissingTagName
            };
            return Err(self.error(kind));
        }
        Ok(self.cursor.slice_from(start))
    }

    fn tag_param(&mut self) -> Result<&'a str, LexError> {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        if !self.cursor.eat_until(b'>') {
            return Err(self.error(LexErrorKind::UnterminatedTag));
        }
        let param = self.cursor.slice_from(start).trim();
        self.cursor.advance(); // consume '>'
        Ok(param)
    }

    /// Called on a non-whitespace char, so the trimmed text is never empty.
    fn value(&mut self) -> Token<'a> {
        let start = self.cursor.pos();
        self.cursor.eat_until(b'<');
        Token::Value(self.cursor.slice_from(start).trim())
    }

    #[cold]
    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            line: self.line(),
            kind,
        }
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;
