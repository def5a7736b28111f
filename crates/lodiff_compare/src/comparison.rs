//! Result of a comparison and the merging of per-priority passes.

use crate::{CompareError, Priority, ToleranceFlags};

/// Engine identifiers a dump announced through its `PageFormatter` and
/// `LineFormatter` tags. Empty when the dump has none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineVersions {
    pub page_formatter: String,
    pub line_formatter: String,
}

/// Verdict of comparing two dumps across all requested priorities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    /// Every pass succeeded.
    pub equal: bool,
    /// Empty when equal, otherwise `"Pri <n> "` followed by the merged
    /// failure messages.
    pub report: String,
    /// Tolerances that fired in the last pass.
    pub flags: ToleranceFlags,
    pub first_failing_priority: Option<Priority>,
    /// Baseline and candidate engines, as seen by the last pass.
    pub engines: [EngineVersions; 2],
}

/// What one pass produced. `report` is `None` when the pass succeeded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PassOutcome {
    pub(crate) report: Option<String>,
    pub(crate) flags: ToleranceFlags,
    pub(crate) engines: [EngineVersions; 2],
}

impl Comparison {
    /// Tolerance codes in `vtedfc` order.
    pub fn flags_code(&self) -> String {
        self.flags.to_string()
    }

    /// Fold a fatal error into a failed comparison with no flags.
    pub fn internal_error(error: &CompareError) -> Self {
        Self {
            equal: false,
            report: format!("LayoutCompare exception: {error}"),
            flags: ToleranceFlags::empty(),
            first_failing_priority: None,
            engines: <[EngineVersions; 2]>::default(),
        }
    }

    /// Merge pass outcomes, in priority order.
    ///
    /// A failing report is appended after `" +++++ "` unless it repeats the
    /// report of the pass right before it.
    pub(crate) fn from_passes(passes: Vec<(Priority, PassOutcome)>) -> Self {
        let mut report: Option<String> = None;
        let mut previous: Option<String> = None;
        let mut first_failing_priority = None;
        let mut flags = ToleranceFlags::empty();
        let mut engines = <[EngineVersions; 2]>::default();

        for (priority, outcome) in passes {
            flags = outcome.flags;
            engines = outcome.engines;

            if let Some(current) = &outcome.report {
                first_failing_priority.get_or_insert(priority);
                report = Some(match report.take() {
                    None => current.clone(),
                    Some(merged) if previous.as_ref() == Some(current) => merged,
                    Some(merged) => format!("{merged} +++++ {current}"),
                });
            }
            previous = outcome.report;
        }

        let report = match (first_failing_priority, report) {
            (Some(priority), Some(report)) => format!("Pri {priority} {report}"),
            _ => String::new(),
        };
        Self {
            equal: first_failing_priority.is_none(),
            report,
            flags,
            first_failing_priority,
            engines,
        }
    }
}

#[cfg(test)]
mod tests;
