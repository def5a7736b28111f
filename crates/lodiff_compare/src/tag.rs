//! Tag names the comparator treats specially.

/// Tags with a dedicated handler. Everything else is compared generically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KnownTag {
    Page,
    Line,
    Lrdo,
    Dropcap,
    Content,
    LineFormatter,
    PageFormatter,
    WordVerticalJustification,
    Yl,
    Xl,
}

impl KnownTag {
    const ALL: [KnownTag; 10] = [
        KnownTag::Page,
        KnownTag::Line,
        KnownTag::Lrdo,
        KnownTag::Dropcap,
        KnownTag::Content,
        KnownTag::LineFormatter,
        KnownTag::PageFormatter,
        KnownTag::WordVerticalJustification,
        KnownTag::Yl,
        KnownTag::Xl,
    ];

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }

    /// Tag name as it appears in a dump. Case-sensitive.
    pub(crate) fn name(self) -> &'static str {
        match self {
            KnownTag::Page => "page",
            KnownTag::Line => "line",
            KnownTag::Lrdo => "lrdo",
            KnownTag::Dropcap => "dropcap",
            KnownTag::Content => "content",
            KnownTag::LineFormatter => "LineFormatter",
            KnownTag::PageFormatter => "PageFormatter",
            KnownTag::WordVerticalJustification => "WordVerticalJustification",
            KnownTag::Yl => "yl",
            KnownTag::Xl => "xl",
        }
    }
}

/// Line drawn between text columns. Handled around every sibling, never
/// dispatched.
pub(crate) const COLUMN_RULE: &str = "linebtwcolumns";
