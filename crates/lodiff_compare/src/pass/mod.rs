//! One comparison pass at a fixed priority.
//!
//! A pass walks both dumps in lock step. Known tags go to dedicated handlers
//! (page, line, lrdo, dropcap, content, formatter headers, bare positions);
//! everything else is compared structurally: same tag, then equal leaf
//! values or recursively equal children.
//!
//! The first difference that is not on the tolerance list ends the pass.
//! Tolerated differences only set a [`ToleranceFlags`] bit.

mod columns;
mod dropcap;
mod line;
mod lrdo;
mod page;

use std::fmt::Display;

use lodiff_lexer::{LexError, SourceBuffer, Token};
use tracing::{debug, trace};

use crate::comparison::{EngineVersions, PassOutcome};
use crate::side::Side;
use crate::stack::ensure_sufficient_stack;
use crate::tag::KnownTag;
use crate::{CompareError, CompareOptions, Priority, ToleranceFlags};

/// Why a pass stopped early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PassError {
    /// Structure differs, or a field is missing or unparseable. The report is
    /// rendered from the pass state at the point of failure.
    TagMismatch,
    /// A rendered mismatch report.
    Mismatch(String),
    /// One side's token stream is malformed. Aborts the whole comparison.
    Lex { side: usize, error: LexError },
}

/// Run one pass over both dumps.
///
/// Mismatches are part of the outcome; only malformed dumps are errors.
pub(crate) fn run(
    sources: [&SourceBuffer; 2],
    priority: Priority,
    options: CompareOptions,
) -> Result<PassOutcome, CompareError> {
    debug!(
        priority = priority.level(),
        baseline = sources[0].name(),
        candidate = sources[1].name(),
        "starting pass"
    );

    let mut pass = Pass::new(sources, priority, options)?;
    let report = match pass.compare_document() {
        Ok(()) => None,
        Err(PassError::TagMismatch) => Some(pass.tag_mismatch_report()),
        Err(PassError::Mismatch(report)) => Some(report),
        Err(PassError::Lex { side, error }) => return Err(malformed(sources[side], error)),
    };

    debug!(
        priority = priority.level(),
        equal = report.is_none(),
        flags = %pass.flags,
        "pass finished"
    );
    Ok(PassOutcome {
        report,
        flags: pass.flags,
        engines: pass.engines(),
    })
}

fn malformed(source: &SourceBuffer, error: LexError) -> CompareError {
    CompareError::Malformed {
        name: source.name().to_owned(),
        source: error,
    }
}

/// State of one pass. Never shared between passes.
pub(crate) struct Pass<'a> {
    /// Baseline (0) and candidate (1).
    sides: [Side<'a>; 2],
    priority: Priority,
    options: CompareOptions,
    /// Number of enclosing `content` elements.
    content_depth: u32,
    page_formatter: [&'a str; 2],
    line_formatter: [&'a str; 2],
    /// Word vertical justification differs between engines; vertical
    /// positions are not comparable.
    justification_differs: bool,
    /// `cp` of the last baseline line, for report prefixes.
    previous_cp: Option<i32>,
    /// Parameter string of the last baseline page, for report prefixes.
    previous_page: &'a str,
    flags: ToleranceFlags,
}

impl<'a> Pass<'a> {
    fn new(
        sources: [&'a SourceBuffer; 2],
        priority: Priority,
        options: CompareOptions,
    ) -> Result<Self, CompareError> {
        let open = |index: usize| {
            Side::new(index, sources[index]).map_err(|error| malformed(sources[index], error))
        };
        Ok(Self {
            sides: [open(0)?, open(1)?],
            priority,
            options,
            content_depth: 0,
            page_formatter: ["", ""],
            line_formatter: ["", ""],
            justification_differs: false,
            previous_cp: None,
            previous_page: "",
            flags: ToleranceFlags::empty(),
        })
    }

    fn engines(&self) -> [EngineVersions; 2] {
        [0, 1].map(|i| EngineVersions {
            page_formatter: self.page_formatter[i].to_owned(),
            line_formatter: self.line_formatter[i].to_owned(),
        })
    }

    // === Traversal ===

    /// Compare the top-level sibling list; both dumps must then be exhausted.
    fn compare_document(&mut self) -> Result<(), PassError> {
        self.compare_siblings()?;
        if !(self.sides[0].at_eof() && self.sides[1].at_eof()) {
            return Err(PassError::TagMismatch);
        }
        Ok(())
    }

    /// Compare siblings until the baseline is no longer at an open tag.
    fn compare_siblings(&mut self) -> Result<(), PassError> {
        ensure_sufficient_stack(|| {
            self.skip_column_rules()?;
            self.same_kind()?;

            while let Token::Open { name, .. } = self.sides[0].current() {
                if !self.sides[1].at_open(name) {
                    return Err(PassError::TagMismatch);
                }
                match KnownTag::from_name(name) {
                    Some(KnownTag::Page) => self.compare_page()?,
                    Some(KnownTag::Line) => self.compare_line()?,
                    Some(KnownTag::Lrdo) => self.compare_lrdo()?,
                    Some(KnownTag::Dropcap) => self.compare_dropcap()?,
                    Some(KnownTag::Content) => self.compare_content()?,
                    Some(KnownTag::LineFormatter) => {
                        self.line_formatter = self.leaf_str_both(name)?;
                    }
                    Some(KnownTag::PageFormatter) => {
                        self.page_formatter = self.leaf_str_both(name)?;
                    }
                    Some(KnownTag::WordVerticalJustification) => {
                        let [a, b] = self.leaf_str_both(name)?;
                        self.justification_differs = a != b && self.formatters_differ();
                    }
                    Some(KnownTag::Yl) => {
                        let [a, b] = self.leaf_int_both(name)?;
                        self.compare_vertical(name, a, b, false)?;
                    }
                    Some(KnownTag::Xl) => {
                        let [a, b] = self.leaf_int_both(name)?;
                        self.compare_horizontal(name, a, b)?;
                    }
                    None => self.compare_generic(name)?,
                }
                self.skip_column_rules()?;
            }
            Ok(())
        })
    }

    /// Any other tag: equal leaf values, or recursively equal children.
    fn compare_generic(&mut self, name: &'a str) -> Result<(), PassError> {
        self.advance_both()?;
        self.same_kind()?;
        if let (Token::Value(a), Token::Value(b)) =
            (self.sides[0].current(), self.sides[1].current())
        {
            self.check(name, a, b)?;
            self.advance_both()?;
        } else {
            self.compare_siblings()?;
        }
        self.expect_close_both(name)
    }

    /// Walk siblings checking structure only. Values are not compared and
    /// column rules are not special.
    fn skip_siblings(&mut self) -> Result<(), PassError> {
        ensure_sufficient_stack(|| {
            self.same_kind()?;
            while let Token::Open { name, .. } = self.sides[0].current() {
                if !self.sides[1].at_open(name) {
                    return Err(PassError::TagMismatch);
                }
                self.advance_both()?;
                self.same_kind()?;
                if matches!(self.sides[0].current(), Token::Value(_)) {
                    self.advance_both()?;
                } else {
                    self.skip_siblings()?;
                }
                self.expect_close_both(name)?;
            }
            Ok(())
        })
    }

    fn compare_content(&mut self) -> Result<(), PassError> {
        let name = KnownTag::Content.name();
        self.expect_open_both(name)?;
        self.content_depth += 1;
        self.compare_siblings()?;
        self.content_depth -= 1;
        self.expect_close_both(name)
    }

    // === Policy ===

    fn formatters_differ(&self) -> bool {
        self.page_formatter[0] != self.page_formatter[1]
    }

    /// Positions nested deeper than one `content` level are skipped on
    /// request.
    fn positions_ignored(&self) -> bool {
        self.options.ignore_nested_positions && self.content_depth > 1
    }

    fn tolerate(&mut self, flag: ToleranceFlags, tag: &str) {
        trace!(
            flag = %flag,
            tag,
            line = self.sides[0].line(),
            "tolerated difference"
        );
        self.flags |= flag;
    }

    /// A vertical position: tolerated under differing justification, or for
    /// footnote lines between differing page formatters.
    fn compare_vertical(&mut self, tag: &str, a: i32, b: i32, footnote: bool) -> Result<(), PassError> {
        if a != b && self.justification_differs {
            self.tolerate(ToleranceFlags::VERTICAL_JUSTIFICATION, tag);
        } else if a != b && footnote {
            self.tolerate(ToleranceFlags::FOOTNOTE_POSITION, tag);
        } else if !self.positions_ignored() {
            self.check(tag, a, b)?;
        }
        Ok(())
    }

    fn compare_horizontal(&self, tag: &str, a: i32, b: i32) -> Result<(), PassError> {
        if self.positions_ignored() {
            return Ok(());
        }
        self.check(tag, a, b)
    }

    // === Reports ===

    /// `"[<page> ]CP=<cp>, "` once a line has been seen.
    fn location(&self) -> String {
        match self.previous_cp {
            None => String::new(),
            Some(cp) if self.previous_page.is_empty() => format!("CP={cp}, "),
            Some(cp) => format!("{} CP={cp}, ", self.previous_page),
        }
    }

    fn value_report(&self, tag: &str, a: &dyn Display, b: &dyn Display) -> String {
        format!(
            "{}<{tag}> {a} != {b}, xml.line = {}",
            self.location(),
            self.sides[0].line()
        )
    }

    fn tag_mismatch_report(&self) -> String {
        let cp = self
            .previous_cp
            .map(|cp| format!("CP={cp}, "))
            .unwrap_or_default();
        format!("{cp}Tags do not match, xml.line = {}", self.sides[0].line())
    }

    fn check<T: PartialEq + Display>(&self, tag: &str, a: T, b: T) -> Result<(), PassError> {
        if a == b {
            return Ok(());
        }
        Err(PassError::Mismatch(self.value_report(tag, &a, &b)))
    }

    /// Like [`check`](Self::check), for values that decide where a line
    /// breaks.
    fn check_line_break<T: PartialEq + Display>(
        &self,
        tag: &str,
        a: T,
        b: T,
    ) -> Result<(), PassError> {
        if a == b {
            return Ok(());
        }
        Err(PassError::Mismatch(format!(
            "Line break {}",
            self.value_report(tag, &a, &b)
        )))
    }

    // === Both sides ===

    fn same_kind(&self) -> Result<(), PassError> {
        if self.sides[0].kind() != self.sides[1].kind() {
            return Err(PassError::TagMismatch);
        }
        Ok(())
    }

    fn advance_both(&mut self) -> Result<(), PassError> {
        for side in &mut self.sides {
            side.advance()?;
        }
        Ok(())
    }

    fn expect_open_both(&mut self, tag: &str) -> Result<(), PassError> {
        for side in &mut self.sides {
            side.expect_open(tag)?;
        }
        Ok(())
    }

    fn expect_close_both(&mut self, tag: &str) -> Result<(), PassError> {
        for side in &mut self.sides {
            side.expect_close(tag)?;
        }
        Ok(())
    }

    fn leaf_str_both(&mut self, tag: &str) -> Result<[&'a str; 2], PassError> {
        Ok([self.sides[0].leaf_str(tag)?, self.sides[1].leaf_str(tag)?])
    }

    fn leaf_int_both(&mut self, tag: &str) -> Result<[i32; 2], PassError> {
        Ok([self.sides[0].leaf_int(tag)?, self.sides[1].leaf_int(tag)?])
    }
}
