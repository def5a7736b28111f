//! Layout dump tokens.

use std::fmt;

/// One token of a layout dump, borrowing its text from the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// `<name param...>`. `param` is the trimmed, unparsed remainder.
    Open { name: &'a str, param: &'a str },
    /// `</name>`.
    Close { name: &'a str },
    /// Leaf text between tags, trimmed.
    Value(&'a str),
    /// End of input. Repeats forever once reached.
    Eof,
}

/// Payload-free token discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Open,
    Close,
    Value,
    Eof,
}

impl Token<'_> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Open { .. } => TokenKind::Open,
            Token::Close { .. } => TokenKind::Close,
            Token::Value(_) => TokenKind::Value,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// Returns `true` if this is `<name ...>`.
    pub fn is_open(&self, tag: &str) -> bool {
        matches!(self, Token::Open { name, .. } if *name == tag)
    }

    /// Returns `true` if this is `</name>`.
    pub fn is_close(&self, tag: &str) -> bool {
        matches!(self, Token::Close { name } if *name == tag)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open { name, param } if param.is_empty() => write!(f, "<{name}>"),
            Token::Open { name, param } => write!(f, "<{name} {param}>"),
            Token::Close { name } => write!(f, "</{name}>"),
            Token::Value(text) => f.write_str(text),
            Token::Eof => f.write_str("<eof>"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TokenKind::Open => "open",
            TokenKind::Close => "close",
            TokenKind::Value => "value",
            TokenKind::Eof => "eof",
        })
    }
}
