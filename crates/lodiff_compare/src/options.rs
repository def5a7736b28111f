//! Comparison options and strictness levels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Strictness of one comparison pass.
///
/// Passes run from [`PageBreaks`](Priority::PageBreaks) up to the requested
/// maximum; the lowest priority that fails classifies the regression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Only `cpL` of every `<page>`.
    PageBreaks,
    /// Page breaks plus `cp`/`cpL` of every line inside the pages.
    PageAndLineBreaks,
    /// Full structural and positional compare.
    #[default]
    Full,
}

impl Priority {
    pub const ALL: [Priority; 3] = [
        Priority::PageBreaks,
        Priority::PageAndLineBreaks,
        Priority::Full,
    ];

    /// Numeric level (0, 1, 2) used in reports.
    pub fn level(self) -> u8 {
        match self {
            Priority::PageBreaks => 0,
            Priority::PageAndLineBreaks => 1,
            Priority::Full => 2,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.level() == level)
    }

    /// All priorities from the least strict up to and including `self`.
    pub fn up_to(self) -> impl Iterator<Item = Priority> {
        Self::ALL.into_iter().filter(move |p| *p <= self)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// A priority level outside `0..=2`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid priority `{0}` (expected 0, 1 or 2)")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Priority::from_level)
            .ok_or_else(|| ParsePriorityError(s.to_string()))
    }
}

/// Options for one [`compare`](crate::compare) call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Skip `upPropL`/`upLineL` when they differ.
    pub fuzzy_duplicate_compare: bool,
    /// Highest priority pass to run.
    pub max_priority: Priority,
    /// Skip `x`/`y` positions nested deeper than one `content` level.
    pub ignore_nested_positions: bool,
}
