use super::*;
use crate::TokenKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: tokenize a whole source, including the final `Eof`. Stops after
/// the first error.
fn lex(source: &str) -> Vec<String> {
    let buf = SourceBuffer::new("test", source);
    let mut lexer = LayoutLexer::new(&buf);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(token) => {
                tokens.push(format!("{token:?}"));
                if token == Token::Eof {
                    return tokens;
                }
            }
            Err(err) => {
                tokens.push(format!("error: {err}"));
                return tokens;
            }
        }
    }
}

/// Helper: first error produced while tokenizing `source`.
fn lex_error(source: &str) -> LexError {
    let buf = SourceBuffer::new("test", source);
    let mut lexer = LayoutLexer::new(&buf);
    loop {
        match lexer.next_token() {
            Ok(Token::Eof) => panic!("expected a lex error in {source:?}"),
            Ok(_) => {}
            Err(err) => return err,
        }
    }
}

// === Tokens ===

#[test]
fn simple_leaf() {
    assert_eq!(
        lex("<cp>0</cp>"),
        vec![
            r#"Open { name: "cp", param: "" }"#,
            r#"Value("0")"#,
            r#"Close { name: "cp" }"#,
            "Eof",
        ]
    );
}

#[test]
fn open_tag_param_is_trimmed() {
    let buf = SourceBuffer::new("t", "<page   ipgd=3 fFirst  >");
    let mut lexer = LayoutLexer::new(&buf);
    assert_eq!(
        lexer.next_token(),
        Ok(Token::Open {
            name: "page",
            param: "ipgd=3 fFirst"
        })
    );
}

#[test]
fn close_tag_ignores_trailing_text() {
    let buf = SourceBuffer::new("t", "</page junk>");
    let mut lexer = LayoutLexer::new(&buf);
    assert_eq!(lexer.next_token(), Ok(Token::Close { name: "page" }));
}

#[test]
fn value_is_trimmed_and_keeps_inner_spaces() {
    let buf = SourceBuffer::new("t", "<endr>\r\n  line end  \r\n</endr>");
    let mut lexer = LayoutLexer::new(&buf);
    assert!(lexer.next_token().is_ok());
    assert_eq!(lexer.next_token(), Ok(Token::Value("line end")));
}

#[test]
fn value_at_end_of_input() {
    let buf = SourceBuffer::new("t", "trailing text ");
    let mut lexer = LayoutLexer::new(&buf);
    assert_eq!(lexer.next_token(), Ok(Token::Value("trailing text")));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn processing_instructions_are_skipped() {
    let kinds: Vec<TokenKind> = {
        let buf = SourceBuffer::new("t", "<?xml version=\"1.0\"?>\n<?style a?><page></page>");
        let mut lexer = LayoutLexer::new(&buf);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token().expect("well-formed");
            kinds.push(token.kind());
            if token == Token::Eof {
                break kinds;
            }
        }
    };
    assert_eq!(
        kinds,
        vec![TokenKind::Open, TokenKind::Close, TokenKind::Eof]
    );
}

#[test]
fn empty_and_blank_sources_are_eof() {
    assert_eq!(lex(""), vec!["Eof"]);
    assert_eq!(lex(" \r\n\t "), vec!["Eof"]);
}

#[test]
fn eof_repeats() {
    let buf = SourceBuffer::new("t", "<a>");
    let mut lexer = LayoutLexer::new(&buf);
    assert!(lexer.next_token().is_ok());
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Ok(Token::Eof));
    }
}

#[test]
fn line_tracks_crlf_across_tokens() {
    let buf = SourceBuffer::new("t", "<a>\r\n<b>\r\r\n<c>\n");
    let mut lexer = LayoutLexer::new(&buf);
    let mut lines = Vec::new();
    while lexer.next_token().expect("valid dump") != Token::Eof {
        lines.push(lexer.line());
    }
    assert_eq!(lines, vec![1, 2, 4]);
    assert_eq!(lexer.line(), 5);
    assert_eq!(lexer.line(), buf.line_at(buf.len()));
}

#[test]
fn non_ascii_value_is_sliced_on_char_boundaries() {
    let buf = SourceBuffer::new("t", "<ihdt>Ä1</ihdt>");
    let mut lexer = LayoutLexer::new(&buf);
    assert!(lexer.next_token().is_ok());
    assert_eq!(lexer.next_token(), Ok(Token::Value("Ä1")));
}

// === Line Numbers ===

#[test]
fn line_tracks_consumed_breaks() {
    let buf = SourceBuffer::new("t", "<a>\r\n<b>\r\n<c>");
    let mut lexer = LayoutLexer::new(&buf);
    assert_eq!(lexer.line(), 1);
    assert!(lexer.next_token().is_ok());
    assert_eq!(lexer.line(), 1);
    assert!(lexer.next_token().is_ok());
    assert_eq!(lexer.line(), 2);
    assert!(lexer.next_token().is_ok());
    assert_eq!(lexer.line(), 3);
}

// === Errors ===

#[test]
fn lone_open_bracket_at_eof() {
    assert_eq!(lex_error("<a></a><").kind, LexErrorKind::TruncatedTag);
}

#[test]
fn close_marker_at_eof() {
    assert_eq!(lex_error("<a></").kind, LexErrorKind::TruncatedTag);
}

#[test]
fn missing_tag_name() {
    assert_eq!(lex_error("< a>").kind, LexErrorKind::MissingTagName);
    assert_eq!(lex_error("<>").kind, LexErrorKind::MissingTagName);
}

#[test]
fn unterminated_tag_reports_line() {
    let err = lex_error("<a>\n<b>\n<c param");
    assert_eq!(err.kind, LexErrorKind::UnterminatedTag);
    assert_eq!(err.line, 3);
}

#[test]
fn unicode_whitespace_between_tokens_is_skipped() {
    assert_eq!(
        lex("<a>\u{00A0}\u{2003}</a>"),
        vec![r#"Open { name: "a", param: "" }"#, r#"Close { name: "a" }"#, "Eof"]
    );
}

#[test]
fn unicode_space_ends_tag_name() {
    assert_eq!(
        lex("<a\u{00A0}x>\u{00A0}v\u{3000}</a>"),
        vec![
            r#"Open { name: "a", param: "x" }"#,
            r#"Value("v")"#,
            r#"Close { name: "a" }"#,
            "Eof",
        ]
    );
}

// === Properties ===

/// A tag name: no whitespace, `<`, `>`, `/` or `?` at the start.
fn tag_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,11}").expect("valid regex")
}

/// A leaf value: no `<`, not blank.
fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9\\-][A-Za-z0-9 .\\-]{0,10}[A-Za-z0-9]?")
        .expect("valid regex")
}

proptest! {
    #[test]
    fn leaf_round_trips(name in tag_name_strategy(), value in value_strategy(), pad in "[ \t\r\n]{0,3}") {
        let source = format!("{pad}<{name}>{pad}{value}{pad}</{name}>{pad}");
        let buf = SourceBuffer::new("p", &source);
        let mut lexer = LayoutLexer::new(&buf);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().expect("generated leaf is well-formed");
            tokens.push(token);
            if token == Token::Eof {
                break;
            }
        }
        prop_assert_eq!(
            tokens,
            vec![
                Token::Open { name: &name, param: "" },
                Token::Value(value.trim()),
                Token::Close { name: &name },
                Token::Eof,
            ]
        );
    }

    #[test]
    fn line_never_exceeds_breaks_plus_one(source in "[<>a-z/ \r\n]{0,64}") {
        let buf = SourceBuffer::new("p", &source);
        let max_line = u32::try_from(source.matches(['\r', '\n']).count()).unwrap_or(u32::MAX) + 1;
        let mut lexer = LayoutLexer::new(&buf);
        for _ in 0..source.len() + 1 {
            prop_assert!(lexer.line() <= max_line);
            match lexer.next_token() {
                Ok(Token::Eof) | Err(_) => break,
                Ok(_) => {}
            }
        }
    }
}
