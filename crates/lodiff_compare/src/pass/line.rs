//! `<line>`: line break values always, geometry at full priority.

use super::{Pass, PassError};
use crate::side::Side;
use crate::tag::KnownTag;
use crate::{Priority, ToleranceFlags};

/// Fields of one `<line>`, in dump order.
struct LineRecord<'a> {
    cp: i32,
    cp_lim: i32,
    yl: i32,
    xl: i32,
    dyl: i32,
    dxl: i32,
    ihdt: &'a str,
    up_prop_l: i32,
    up_line_l: i32,
    endr: &'a str,
}

impl<'a> LineRecord<'a> {
    fn read(side: &mut Side<'a>) -> Result<Self, PassError> {
        let line = KnownTag::Line.name();
        side.expect_open(line)?;
        let record = Self {
            cp: side.leaf_int("cp")?,
            cp_lim: side.leaf_int("cpL")?,
            yl: side.leaf_int("yl")?,
            xl: side.leaf_int("xl")?,
            dyl: side.leaf_int("dyl")?,
            dxl: side.leaf_int("dxl")?,
            ihdt: side.leaf_str("ihdt")?,
            up_prop_l: side.leaf_int("upPropL")?,
            up_line_l: side.leaf_int("upLineL")?,
            endr: side.leaf_str("endr")?,
        };
        side.expect_close(line)?;
        Ok(record)
    }

    /// Endnote separator and continuation separator lines.
    fn is_endnote_separator(&self) -> bool {
        matches!(self.ihdt, "9" | "10" | "11")
    }

    /// Footnote text or footnote separator lines.
    fn is_footnote(&self) -> bool {
        self.ihdt.ends_with('F') || matches!(self.ihdt, "6" | "7" | "8")
    }
}

impl<'a> Pass<'a> {
    pub(super) fn compare_line(&mut self) -> Result<(), PassError> {
        let a = LineRecord::read(&mut self.sides[0])?;
        let b = LineRecord::read(&mut self.sides[1])?;
        self.previous_cp = Some(a.cp);

        // Engines lay out endnote separators with different story ids.
        let mut separator_tolerated = false;
        if a.ihdt != b.ihdt {
            if self.formatters_differ() && a.is_endnote_separator() && b.is_endnote_separator() {
                separator_tolerated = true;
                self.tolerate(ToleranceFlags::ENDNOTE_SEPARATOR, "ihdt");
            } else {
                self.check_line_break("ihdt", a.ihdt, b.ihdt)?;
            }
        }
        let footnote = a.is_footnote() && self.formatters_differ();

        if !separator_tolerated {
            self.check_line_break("cp", a.cp, b.cp)?;
            self.check_line_break("cpL", a.cp_lim, b.cp_lim)?;
        }

        if self.priority < Priority::Full {
            return Ok(());
        }

        self.compare_vertical("yl", a.yl, b.yl, footnote)?;
        self.compare_horizontal("xl", a.xl, b.xl)?;
        self.check("dyl", a.dyl, b.dyl)?;
        self.check("dxl", a.dxl, b.dxl)?;

        if !separator_tolerated {
            let duplicates_differ = a.up_prop_l != b.up_prop_l || a.up_line_l != b.up_line_l;
            if !(duplicates_differ && self.options.fuzzy_duplicate_compare) {
                self.check("upPropL", a.up_prop_l, b.up_prop_l)?;
                self.check("upLineL", a.up_line_l, b.up_line_l)?;
            }
            self.check("endr", a.endr, b.endr)?;
        }
        Ok(())
    }
}
