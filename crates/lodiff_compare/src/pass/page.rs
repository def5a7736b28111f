//! `<page>`: page break limits, then a priority-dependent body walk.

use super::{Pass, PassError};
use crate::tag::KnownTag;
use crate::Priority;

impl<'a> Pass<'a> {
    pub(super) fn compare_page(&mut self) -> Result<(), PassError> {
        let page = KnownTag::Page.name();
        let candidate_param = self.sides[1].tag_param();
        self.previous_page = self.sides[0].tag_param();
        self.expect_open_both(page)?;

        let [a, b] = self.leaf_int_both("cpL")?;
        if a != b {
            return Err(PassError::Mismatch(format!(
                "Page break {candidate_param} cpLim: {a} != {b}"
            )));
        }
        // Footnote limit is optional; the baseline decides whether it is there.
        if self.sides[0].at_open("cpLFtn") {
            let [a, b] = self.leaf_int_both("cpLFtn")?;
            if a != b {
                return Err(PassError::Mismatch(format!(
                    "Page break {candidate_param} cpLimFootnote: {a} != {b}"
                )));
            }
        }

        match self.priority {
            Priority::PageBreaks => {
                // Pages do not nest, so the next `</page>` closes this one.
                for side in &mut self.sides {
                    side.skip_until(|token| token.is_close(page))?;
                }
            }
            Priority::PageAndLineBreaks => self.compare_page_lines()?,
            Priority::Full => self.compare_siblings()?,
        }

        self.expect_close_both(page)
    }

    /// Compare every line of the page, wherever it is nested, ignoring
    /// everything else.
    fn compare_page_lines(&mut self) -> Result<(), PassError> {
        let page = KnownTag::Page.name();
        let line = KnownTag::Line.name();
        loop {
            for side in &mut self.sides {
                side.skip_until(|token| token.is_close(page) || token.is_open(line))?;
            }
            if !(self.sides[0].at_open(line) || self.sides[1].at_open(line)) {
                return Ok(());
            }
            self.compare_line()?;
        }
    }
}
