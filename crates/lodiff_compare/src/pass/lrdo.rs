//! `<lrdo>`: floating objects (figures, frames, text boxes).

use super::{Pass, PassError};
use crate::side::Side;
use crate::tag::KnownTag;
use crate::ToleranceFlags;

/// Fields of one `<lrdo>`, in dump order.
struct LrdoRecord<'a> {
    cp: i32,
    xl_full: i32,
    yl_full: i32,
    xp_left: i32,
    yp_top: i32,
    xp_right: i32,
    yp_bottom: i32,
    ihdt: &'a str,
    ignore_position: i32,
}

impl<'a> LrdoRecord<'a> {
    fn read(side: &mut Side<'a>) -> Result<Self, PassError> {
        let lrdo = KnownTag::Lrdo.name();
        side.expect_open(lrdo)?;
        let record = Self {
            cp: side.leaf_int("cp")?,
            xl_full: side.leaf_int("xlFull")?,
            yl_full: side.leaf_int("ylFull")?,
            xp_left: side.leaf_int("xpLeft")?,
            yp_top: side.leaf_int("ypTop")?,
            xp_right: side.leaf_int("xpRight")?,
            yp_bottom: side.leaf_int("ypBottom")?,
            ihdt: side.leaf_str("ihdt")?,
            ignore_position: side.leaf_int("fIgnorePosition")?,
        };
        side.expect_close(lrdo)?;
        Ok(record)
    }

    fn vertical_differs(&self, other: &Self) -> bool {
        self.yl_full != other.yl_full
            || self.yp_top != other.yp_top
            || self.yp_bottom != other.yp_bottom
    }
}

impl<'a> Pass<'a> {
    pub(super) fn compare_lrdo(&mut self) -> Result<(), PassError> {
        let a = LrdoRecord::read(&mut self.sides[0])?;
        let b = LrdoRecord::read(&mut self.sides[1])?;

        self.check("cp", a.cp, b.cp)?;
        self.check("ihdt", a.ihdt, b.ihdt)?;
        self.check("fIgnorePosition", a.ignore_position, b.ignore_position)?;

        if a.ignore_position != 0 {
            // The object asked for its position to be ignored. Under
            // differing justification `ylFull` and `ypBottom` are not looked at.
            let moved = a.xl_full != b.xl_full
                || a.xp_left != b.xp_left
                || a.yp_top != b.yp_top
                || a.xp_right != b.xp_right
                || (!self.justification_differs
                    && (a.yl_full != b.yl_full || a.yp_bottom != b.yp_bottom));
            if moved {
                self.tolerate(ToleranceFlags::FIGURE_POSITION, "lrdo");
            }
            return Ok(());
        }

        self.compare_horizontal("xlFull", a.xl_full, b.xl_full)?;
        if self.justification_differs {
            if a.vertical_differs(&b) {
                self.tolerate(ToleranceFlags::VERTICAL_JUSTIFICATION, "lrdo");
            }
        } else if !self.positions_ignored() {
            self.check("ylFull", a.yl_full, b.yl_full)?;
            self.check("ypTop", a.yp_top, b.yp_top)?;
            self.check("ypBottom", a.yp_bottom, b.yp_bottom)?;
        }
        self.compare_horizontal("xpLeft", a.xp_left, b.xp_left)?;
        self.compare_horizontal("xpRight", a.xp_right, b.xp_right)
    }
}
