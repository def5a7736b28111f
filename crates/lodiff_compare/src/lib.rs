//! Tolerance-aware structural comparison of layout dumps.
//!
//! Two dumps of the same document, produced by different layout engines,
//! are compared in up to three passes of increasing strictness:
//!
//! | priority | compares |
//! |---|---|
//! | 0 `PageBreaks` | `cpL` of every page |
//! | 1 `PageAndLineBreaks` | page breaks plus `cp`/`cpL` of every line |
//! | 2 `Full` | every tag, value and position |
//!
//! The lowest failing priority classifies a regression: a page break moved,
//! a line break moved, or only geometry changed.
//!
//! Some differences between engines are known and accepted. They are not
//! failures; each one sets a [`ToleranceFlags`] bit instead (see
//! [`flags_legend`]).
//!
//! # Example
//!
//! ```
//! use lodiff_compare::{compare_sources, CompareOptions};
//! use lodiff_lexer::SourceBuffer;
//!
//! let a = SourceBuffer::new("a", "<page><cpL>10</cpL></page>");
//! let b = SourceBuffer::new("b", "<page><cpL>12</cpL></page>");
//! let result = compare_sources(&a, &b, &CompareOptions::default()).unwrap();
//! assert!(!result.equal);
//! assert!(result.report.starts_with("Pri 0 Page break"));
//! ```

mod comparison;
mod error;
mod flags;
mod options;
mod pass;
mod side;
mod stack;
mod tag;

use std::path::Path;

use lodiff_lexer::SourceBuffer;

pub use comparison::{Comparison, EngineVersions};
pub use error::CompareError;
pub use flags::{flags_legend, ToleranceFlags};
pub use options::{CompareOptions, ParsePriorityError, Priority};

/// Compare two dump files.
///
/// Each file is read once and re-tokenized for every pass.
pub fn compare(
    baseline: impl AsRef<Path>,
    candidate: impl AsRef<Path>,
    options: &CompareOptions,
) -> Result<Comparison, CompareError> {
    let baseline = SourceBuffer::from_path(baseline.as_ref())?;
    let candidate = SourceBuffer::from_path(candidate.as_ref())?;
    compare_sources(&baseline, &candidate, options)
}

/// Compare two already loaded dumps.
pub fn compare_sources(
    baseline: &SourceBuffer,
    candidate: &SourceBuffer,
    options: &CompareOptions,
) -> Result<Comparison, CompareError> {
    let passes = options
        .max_priority
        .up_to()
        .map(|priority| {
            pass::run([baseline, candidate], priority, *options).map(|outcome| (priority, outcome))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Comparison::from_passes(passes))
}

/// Like [`compare`], but a fatal error becomes a failed comparison whose
/// report starts with `"LayoutCompare exception: "`.
pub fn compare_or_report(
    baseline: impl AsRef<Path>,
    candidate: impl AsRef<Path>,
    options: &CompareOptions,
) -> Comparison {
    compare(baseline, candidate, options).unwrap_or_else(|error| Comparison::internal_error(&error))
}
