use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_uses_fixed_order() {
    let flags = ToleranceFlags::COLUMN_RULE | ToleranceFlags::VERTICAL_JUSTIFICATION;
    assert_eq!(flags.to_string(), "vc");
    assert_eq!(ToleranceFlags::all().to_string(), "vtedfc");
    assert_eq!(ToleranceFlags::empty().to_string(), "");
}

#[test]
fn legend_has_one_line_per_flag_in_order() {
    let codes: String = flags_legend()
        .lines()
        .filter_map(|line| line.trim_start().chars().next())
        .collect();
    assert_eq!(codes, "vtedfc");
}

#[test]
fn legend_lines_are_lf_separated() {
    let legend = flags_legend();
    assert!(!legend.contains('\r'));
    assert_eq!(
        legend.lines().next(),
        Some(" v : Different yl in vertical justification, ignored")
    );
}
