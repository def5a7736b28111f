//! One dump's token cursor within a pass.

use lodiff_lexer::{LayoutLexer, LexError, SourceBuffer, Token, TokenKind};

use crate::pass::PassError;

/// Lexer plus the cached current token.
///
/// The lexer never pushes back, so every "look at the current tag" decision
/// in the comparator goes through `current`.
pub(crate) struct Side<'a> {
    /// 0 for the baseline dump, 1 for the candidate.
    index: usize,
    lexer: LayoutLexer<'a>,
    current: Token<'a>,
}

impl<'a> Side<'a> {
    pub(crate) fn new(index: usize, source: &'a SourceBuffer) -> Result<Self, LexError> {
        let mut lexer = LayoutLexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            index,
            lexer,
            current,
        })
    }

    #[inline]
    pub(crate) fn current(&self) -> Token<'a> {
        self.current
    }

    #[inline]
    pub(crate) fn kind(&self) -> TokenKind {
        self.current.kind()
    }

    pub(crate) fn advance(&mut self) -> Result<(), PassError> {
        self.current = self.lexer.next_token().map_err(|error| PassError::Lex {
            side: self.index,
            error,
        })?;
        Ok(())
    }

    #[inline]
    pub(crate) fn at_open(&self, tag: &str) -> bool {
        self.current.is_open(tag)
    }

    #[inline]
    pub(crate) fn at_eof(&self) -> bool {
        self.current == Token::Eof
    }

    /// Line of the lexer position (just past the current token).
    pub(crate) fn line(&self) -> u32 {
        self.lexer.line()
    }

    /// Parameter string of the current open tag, empty otherwise.
    pub(crate) fn tag_param(&self) -> &'a str {
        match self.current {
            Token::Open { param, .. } => param,
            _ => "",
        }
    }

    pub(crate) fn expect_open(&mut self, tag: &str) -> Result<(), PassError> {
        if !self.current.is_open(tag) {
            return Err(PassError::TagMismatch);
        }
        self.advance()
    }

    pub(crate) fn expect_close(&mut self, tag: &str) -> Result<(), PassError> {
        if !self.current.is_close(tag) {
            return Err(PassError::TagMismatch);
        }
        self.advance()
    }

    /// Read `<tag>value</tag>`.
    pub(crate) fn leaf_str(&mut self, tag: &str) -> Result<&'a str, PassError> {
        self.expect_open(tag)?;
        let Token::Value(value) = self.current else {
            return Err(PassError::TagMismatch);
        };
        self.advance()?;
        self.expect_close(tag)?;
        Ok(value)
    }

    /// Read `<tag>value</tag>` as a 32-bit integer. A value that does not
    /// parse is a structural mismatch, not a fatal error.
    pub(crate) fn leaf_int(&mut self, tag: &str) -> Result<i32, PassError> {
        self.leaf_str(tag)?
            .parse()
            .map_err(|_| PassError::TagMismatch)
    }

    /// Advance until `stop` holds for the current token or the end of input.
    /// Skipped tokens are not validated.
    pub(crate) fn skip_until(&mut self, stop: impl Fn(&Token<'a>) -> bool) -> Result<(), PassError> {
        while !self.at_eof() && !stop(&self.current) {
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;
