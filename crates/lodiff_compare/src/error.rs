//! Fatal comparison errors.
//!
//! A mismatch between two dumps is not an error: it is a [`Comparison`]
//! with `equal == false`. Errors here mean the dumps could not be compared.
//!
//! [`Comparison`]: crate::Comparison

use lodiff_lexer::{LexError, SourceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    /// A dump could not be read or decoded.
    #[error(transparent)]
    Load(#[from] SourceError),
    /// A dump's token stream is malformed.
    #[error("problem reading layout dump {name}, {source}")]
    Malformed {
        name: String,
        #[source]
        source: LexError,
    },
}
