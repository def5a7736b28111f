use super::*;
use lodiff_lexer::{LexError, LexErrorKind};
use pretty_assertions::assert_eq;

fn passed(flags: ToleranceFlags) -> PassOutcome {
    PassOutcome {
        report: None,
        flags,
        engines: Default::default(),
    }
}

fn failed(report: &str) -> PassOutcome {
    PassOutcome {
        report: Some(report.to_string()),
        ..PassOutcome::default()
    }
}

#[test]
fn all_passes_equal() {
    let result = Comparison::from_passes(vec![
        (Priority::PageBreaks, passed(ToleranceFlags::empty())),
        (Priority::PageAndLineBreaks, passed(ToleranceFlags::empty())),
        (Priority::Full, passed(ToleranceFlags::COLUMN_RULE)),
    ]);
    assert!(result.equal);
    assert_eq!(result.report, "");
    assert_eq!(result.first_failing_priority, None);
    assert_eq!(result.flags_code(), "c");
}

#[test]
fn repeated_report_is_not_duplicated() {
    let result = Comparison::from_passes(vec![
        (Priority::PageBreaks, passed(ToleranceFlags::empty())),
        (Priority::PageAndLineBreaks, failed("Line break CP=4, <cp> 4 != 5, xml.line = 9")),
        (Priority::Full, failed("Line break CP=4, <cp> 4 != 5, xml.line = 9")),
    ]);
    assert!(!result.equal);
    assert_eq!(
        result.report,
        "Pri 1 Line break CP=4, <cp> 4 != 5, xml.line = 9"
    );
    assert_eq!(result.first_failing_priority, Some(Priority::PageAndLineBreaks));
}

#[test]
fn differing_reports_are_joined() {
    let result = Comparison::from_passes(vec![
        (Priority::PageBreaks, failed("Page break ipgd=1 cpLim: 10 != 11")),
        (Priority::PageAndLineBreaks, failed("Page break ipgd=1 cpLim: 10 != 11")),
        (Priority::Full, failed("CP=0, <yl> 1 != 2, xml.line = 3")),
    ]);
    assert_eq!(
        result.report,
        "Pri 0 Page break ipgd=1 cpLim: 10 != 11 +++++ CP=0, <yl> 1 != 2, xml.line = 3"
    );
}

#[test]
fn report_after_a_passing_pass_is_appended_even_if_seen_before() {
    let result = Comparison::from_passes(vec![
        (Priority::PageBreaks, failed("A")),
        (Priority::PageAndLineBreaks, passed(ToleranceFlags::empty())),
        (Priority::Full, failed("A")),
    ]);
    assert_eq!(result.report, "Pri 0 A +++++ A");
}

#[test]
fn flags_and_engines_come_from_last_pass() {
    let mut last = failed("x");
    last.flags = ToleranceFlags::DROPCAP_HEIGHT;
    last.engines[1].page_formatter = "pts".to_string();
    let result = Comparison::from_passes(vec![
        (Priority::PageBreaks, passed(ToleranceFlags::VERTICAL_JUSTIFICATION)),
        (Priority::PageAndLineBreaks, last),
    ]);
    assert_eq!(result.flags, ToleranceFlags::DROPCAP_HEIGHT);
    assert_eq!(result.engines[1].page_formatter, "pts");
}

#[test]
fn internal_error_report() {
    let error = CompareError::Malformed {
        name: "a.xml".to_string(),
        source: LexError {
            line: 3,
            kind: LexErrorKind::MissingTagName,
        },
    };
    let result = Comparison::internal_error(&error);
    assert!(!result.equal);
    assert_eq!(
        result.report,
        "LayoutCompare exception: problem reading layout dump a.xml, line 3: invalid tag"
    );
    assert_eq!(result.flags_code(), "");
}
