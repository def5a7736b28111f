//! Tokenizer for layout dumps.
//!
//! A layout dump is a small SGML-like markup: open tags with an opaque
//! parameter string, close tags, leaf text values, and processing
//! instructions that are skipped. It is not XML; there are no attributes,
//! entities, or self-closing tags.
//!
//! # Architecture
//!
//! ```text
//! bytes ──► SourceBuffer (decode, sentinel, line index)
//!               │
//!               ▼
//!           Cursor (byte navigation)
//!               │
//!               ▼
//!           LayoutLexer ──► Token (Open / Close / Value / Eof)
//! ```
//!
//! The lexer is pull-based and never pushes a token back. Consumers that
//! need to look at the "current" token cache it themselves.

mod cursor;
mod lex_error;
mod lexer;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind, SourceError};
pub use lexer::LayoutLexer;
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};
