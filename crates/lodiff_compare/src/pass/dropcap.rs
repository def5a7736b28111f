//! `<dropcap>`: header fields compared, nested content walked for structure.

use super::{Pass, PassError};
use crate::side::Side;
use crate::tag::KnownTag;
use crate::ToleranceFlags;

/// Header of one `<dropcap>`. The content that follows is not part of it.
struct DropcapHeader {
    cp: i32,
    cp_lim: i32,
    yl: i32,
    xl: i32,
    dyl: i32,
    dxl: i32,
}

impl DropcapHeader {
    fn read(side: &mut Side<'_>) -> Result<Self, PassError> {
        side.expect_open(KnownTag::Dropcap.name())?;
        let header = Self {
            cp: side.leaf_int("cp")?,
            cp_lim: side.leaf_int("cpL")?,
            yl: side.leaf_int("yl")?,
            xl: side.leaf_int("xl")?,
            dyl: side.leaf_int("dyl")?,
            dxl: side.leaf_int("dxl")?,
        };
        // Present but never compared.
        side.leaf_str("ihdt")?;
        Ok(header)
    }
}

impl Pass<'_> {
    pub(super) fn compare_dropcap(&mut self) -> Result<(), PassError> {
        let a = DropcapHeader::read(&mut self.sides[0])?;
        let b = DropcapHeader::read(&mut self.sides[1])?;

        self.check("cp", a.cp, b.cp)?;
        self.check("cpL", a.cp_lim, b.cp_lim)?;
        self.compare_vertical("yl", a.yl, b.yl, false)?;
        self.compare_horizontal("xl", a.xl, b.xl)?;
        self.check("dxl", a.dxl, b.dxl)?;

        if !self.formatters_differ() {
            self.check("dyl", a.dyl, b.dyl)?;
        } else if a.dyl != b.dyl {
            self.tolerate(ToleranceFlags::DROPCAP_HEIGHT, "dyl");
        }

        self.skip_siblings()?;
        self.expect_close_both(KnownTag::Dropcap.name())
    }
}
