use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("a", "<a>");
    assert_eq!(buf.cursor().current(), b'<');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("a", "abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_stops_at_eof() {
    let buf = SourceBuffer::new("a", "x");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.current(), 0);
}

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("a", "");
    assert!(buf.cursor().is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a", "a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Whitespace ===

#[test]
fn eat_whitespace_skips_all_ascii_whitespace() {
    let buf = SourceBuffer::new("a", " \t\r\n\x0B\x0C<");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'<');
    assert_eq!(cursor.pos(), 6);
}

#[test]
fn eat_whitespace_skips_unicode_spaces() {
    let buf = SourceBuffer::new("a", "\u{00A0}\u{2003} \u{3000}<");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'<');
    assert_eq!(cursor.pos(), 9);
}

#[test]
fn current_char_decodes_multibyte() {
    let buf = SourceBuffer::new("a", "\u{00E9}x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), '\u{00E9}');
    cursor.eat_tag_name();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current_char(), '\0');
}

#[test]
fn eat_whitespace_stops_at_eof() {
    let buf = SourceBuffer::new("a", "   ");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert!(cursor.is_eof());
}

// === Tag Names ===

#[test]
fn eat_tag_name_stops_at_close_bracket() {
    let buf = SourceBuffer::new("a", "line>");
    let mut cursor = buf.cursor();
    cursor.eat_tag_name();
    assert_eq!(cursor.slice_from(0), "line");
    assert_eq!(cursor.current(), b'>');
}

#[test]
fn eat_tag_name_stops_at_whitespace() {
    let buf = SourceBuffer::new("a", "page ipgd=3>");
    let mut cursor = buf.cursor();
    cursor.eat_tag_name();
    assert_eq!(cursor.slice_from(0), "page");
}

#[test]
fn eat_tag_name_runs_to_eof() {
    let buf = SourceBuffer::new("a", "page");
    let mut cursor = buf.cursor();
    cursor.eat_tag_name();
    assert!(cursor.is_eof());
    assert_eq!(cursor.slice_from(0), "page");
}

#[test]
fn eat_tag_name_stops_at_unicode_space() {
    let buf = SourceBuffer::new("a", "a\u{00A0}x>");
    let mut cursor = buf.cursor();
    cursor.eat_tag_name();
    assert_eq!(cursor.slice_from(0), "a");
    assert_eq!(cursor.current_char(), '\u{00A0}');
}

// === Searching ===

#[test]
fn eat_until_finds_byte() {
    let buf = SourceBuffer::new("a", "240</dyl>");
    let mut cursor = buf.cursor();
    assert!(cursor.eat_until(b'<'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.slice(0, 3), "240");
}

#[test]
fn eat_until_missing_byte_lands_on_eof() {
    let buf = SourceBuffer::new("a", "no tag here");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_until(b'>'));
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 11);
}

#[test]
fn eat_until_ignores_padding() {
    // The sentinel and padding are NUL; searching for NUL must not find them.
    let buf = SourceBuffer::new("a", "abc");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_until(0));
    assert_eq!(cursor.pos(), 3);
}
