//! Tolerance flags: which known-acceptable differences were seen.

use std::fmt;

bitflags::bitflags! {
    /// Categories of differences that were detected and deliberately not
    /// treated as failures.
    ///
    /// Rendered as single-letter codes in the fixed order `vtedfc`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ToleranceFlags: u8 {
        /// `v`: `yl` differs while vertical justification differs.
        const VERTICAL_JUSTIFICATION = 1 << 0;
        /// `t`: footnote line `yl` differs between page formatters.
        const FOOTNOTE_POSITION = 1 << 1;
        /// `e`: endnote separator format run differs between page formatters.
        const ENDNOTE_SEPARATOR = 1 << 2;
        /// `d`: dropcap height differs between page formatters.
        const DROPCAP_HEIGHT = 1 << 3;
        /// `f`: position of a floating object that asks to be ignored.
        const FIGURE_POSITION = 1 << 4;
        /// `c`: line between columns present on one side only, or moved.
        const COLUMN_RULE = 1 << 5;
    }
}

/// Flag codes in output order.
const CODES: [(ToleranceFlags, char); 6] = [
    (ToleranceFlags::VERTICAL_JUSTIFICATION, 'v'),
    (ToleranceFlags::FOOTNOTE_POSITION, 't'),
    (ToleranceFlags::ENDNOTE_SEPARATOR, 'e'),
    (ToleranceFlags::DROPCAP_HEIGHT, 'd'),
    (ToleranceFlags::FIGURE_POSITION, 'f'),
    (ToleranceFlags::COLUMN_RULE, 'c'),
];

impl fmt::Display for ToleranceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, code) in CODES {
            if self.contains(flag) {
                write!(f, "{code}")?;
            }
        }
        Ok(())
    }
}

/// Human-readable description of every flag code.
pub fn flags_legend() -> &'static str {
    " v : Different yl in vertical justification, ignored\n\
     \x20t : Different footnote yl, ignored\n\
     \x20e : Different endnote separator, ignored\n\
     \x20d : Different dropcap height, ignored\n\
     \x20f : Different figure position (usually inside wrapped or double nested table), ignored\n\
     \x20c : Different line between columns, ignored"
}

#[cfg(test)]
mod tests;
