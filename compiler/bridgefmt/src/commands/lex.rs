//! The `lex` command: dump the token stream of a file.

use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use bridgefmt_token::TokenList;

use super::{read_source, report};

/// One line per token: kind and text, with the text escaped.
pub fn render_tokens(tokens: &TokenList) -> String {
    let mut output = String::new();
    for token in tokens.iter() {
        let _ = writeln!(output, "  {:?} {:?}", token.kind, token.text);
    }
    output
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> ExitCode {
    let content = match read_source(Path::new(path)) {
        Ok(content) => content,
        Err(err) => return report(&err),
    };
    let tokens = bridgefmt_lexer::lex(&content);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    print!("{}", render_tokens(&tokens));
    ExitCode::SUCCESS
}
