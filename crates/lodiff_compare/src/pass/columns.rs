//! `<linebtwcolumns>`: rules drawn between text columns.
//!
//! Engines disagree on whether and where to draw them, so they never fail a
//! comparison; any difference only sets the `c` flag.

use super::{Pass, PassError};
use crate::side::Side;
use crate::tag::COLUMN_RULE;
use crate::ToleranceFlags;

/// `xl`, `yl`, `dxl`, `dyl` of one rule.
fn read_rule(side: &mut Side<'_>) -> Result<[i32; 4], PassError> {
    side.expect_open(COLUMN_RULE)?;
    let rule = [
        side.leaf_int("xl")?,
        side.leaf_int("yl")?,
        side.leaf_int("dxl")?,
        side.leaf_int("dyl")?,
    ];
    side.expect_close(COLUMN_RULE)?;
    Ok(rule)
}

impl Pass<'_> {
    /// Consume column rules in front of both cursors.
    pub(super) fn skip_column_rules(&mut self) -> Result<(), PassError> {
        loop {
            match [0, 1].map(|i| self.sides[i].at_open(COLUMN_RULE)) {
                [false, false] => return Ok(()),
                [true, true] => {
                    let a = read_rule(&mut self.sides[0])?;
                    let b = read_rule(&mut self.sides[1])?;
                    if a != b {
                        self.tolerate(ToleranceFlags::COLUMN_RULE, COLUMN_RULE);
                    }
                }
                [true, false] => {
                    read_rule(&mut self.sides[0])?;
                    self.tolerate(ToleranceFlags::COLUMN_RULE, COLUMN_RULE);
                }
                [false, true] => {
                    read_rule(&mut self.sides[1])?;
                    self.tolerate(ToleranceFlags::COLUMN_RULE, COLUMN_RULE);
                }
            }
        }
    }
}
