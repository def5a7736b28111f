//! `lodiff lex`: print the token stream of a dump.

use std::path::Path;

use lodiff_lexer::{LayoutLexer, SourceBuffer, Token};

/// Tokenize a dump and print one token per line.
///
/// Exit code: 0 well-formed, 2 unreadable or malformed dump.
pub fn lex_file(path: &str) -> i32 {
    let source = match SourceBuffer::from_path(Path::new(path)) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    println!("Tokens for '{}' ({} bytes):", source.name(), source.len());
    let mut lexer = LayoutLexer::new(&source);
    let mut count = 0usize;
    loop {
        match lexer.next_token() {
            Ok(token) => {
                println!("  {:>5}  {:<5}  {token}", lexer.line(), token.kind());
                count += 1;
                if token == Token::Eof {
                    break;
                }
            }
            Err(e) => {
                eprintln!("error: {e}");
                return 2;
            }
        }
    }
    println!("{count} tokens");
    0
}
