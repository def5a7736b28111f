//! Loading and tokenizing errors.
//!
//! Both are fatal: a dump that cannot be read or tokenized cannot be
//! compared at all, which is different from two dumps that differ.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A dump could not be loaded.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("can not open layout dump {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("layout dump {name} is not readable text: {reason}")]
    Encoding { name: String, reason: &'static str },
    #[error("layout dump {name} is too large ({len} bytes)")]
    TooLarge { name: String, len: usize },
}

/// Malformed token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct LexError {
    /// Line of the position where tokenizing stopped.
    pub line: u32,
    pub kind: LexErrorKind,
}

/// What was wrong with the token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// `<`, `</` or `<?` at the very end of the input.
    #[error("tag is cut off by the end of the file")]
    TruncatedTag,
    /// `<` followed by whitespace or `>`.
    #[error("invalid tag")]
    MissingTagName,
    /// No `>` before the end of the input.
    #[error("tag must be closed")]
    UnterminatedTag,
}
