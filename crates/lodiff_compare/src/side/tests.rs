use super::*;
use lodiff_lexer::LexErrorKind;
use pretty_assertions::assert_eq;

fn side(source: &SourceBuffer) -> Side<'_> {
    Side::new(1, source).expect("first token lexes")
}

#[test]
fn reads_leaves() {
    let buf = SourceBuffer::new("t", "<cp>42</cp><ihdt>9F</ihdt>");
    let mut side = side(&buf);
    assert_eq!(side.leaf_int("cp"), Ok(42));
    assert_eq!(side.leaf_str("ihdt"), Ok("9F"));
    assert!(side.at_eof());
}

#[test]
fn negative_integers_parse() {
    let buf = SourceBuffer::new("t", "<xl>-120</xl>");
    assert_eq!(side(&buf).leaf_int("xl"), Ok(-120));
}

#[test]
fn non_integer_leaf_is_tag_mismatch() {
    for text in ["<cp>abc</cp>", "<cp>99999999999</cp>", "<cp>1.5</cp>"] {
        let buf = SourceBuffer::new("t", text);
        assert_eq!(side(&buf).leaf_int("cp"), Err(PassError::TagMismatch), "{text}");
    }
}

#[test]
fn wrong_field_is_tag_mismatch() {
    let buf = SourceBuffer::new("t", "<cpL>1</cpL>");
    assert_eq!(side(&buf).leaf_int("cp"), Err(PassError::TagMismatch));

    let buf = SourceBuffer::new("t", "<cp><x>1</x></cp>");
    assert_eq!(side(&buf).leaf_int("cp"), Err(PassError::TagMismatch));

    let buf = SourceBuffer::new("t", "<cp>1</cpL>");
    assert_eq!(side(&buf).leaf_int("cp"), Err(PassError::TagMismatch));
}

#[test]
fn tag_param_only_for_open_tags() {
    let buf = SourceBuffer::new("t", "<page ipgd=2></page>");
    let mut side = side(&buf);
    assert_eq!(side.tag_param(), "ipgd=2");
    assert!(side.advance().is_ok());
    assert_eq!(side.tag_param(), "");
}

#[test]
fn skip_until_stops_at_match_or_eof() {
    let buf = SourceBuffer::new("t", "<a><b>1</b><line></a>");
    let mut side = side(&buf);
    assert!(side.skip_until(|t| t.is_open("line")).is_ok());
    assert!(side.at_open("line"));

    assert!(side.skip_until(|t| t.is_open("missing")).is_ok());
    assert!(side.at_eof());
}

#[test]
fn lex_errors_carry_side_index() {
    let buf = SourceBuffer::new("t", "<a>\n<");
    let mut side = side(&buf);
    assert_eq!(
        side.advance(),
        Err(PassError::Lex {
            side: 1,
            error: LexError {
                line: 2,
                kind: LexErrorKind::TruncatedTag,
            },
        })
    );
}

#[test]
fn first_token_error_surfaces_from_new() {
    let buf = SourceBuffer::new("t", "<>");
    assert!(Side::new(0, &buf).is_err());
}

#[test]
fn kind_and_current_agree() {
    let buf = SourceBuffer::new("t", "text");
    let side = side(&buf);
    assert_eq!(side.kind(), TokenKind::Value);
    assert_eq!(side.current(), Token::Value("text"));
}
