//! Lossless Swift tokenizer built on logos.
//!
//! Produces a [`TokenList`] in which every byte of the input belongs to
//! exactly one token, whitespace and comments included, so that
//! `lex(source).to_source() == source` always holds. The lexer never fails:
//! input it cannot classify becomes [`TokenKind::Other`].

mod keywords;
mod scan;

use bridgefmt_token::{Delimiter, Token, TokenKind, TokenList};
use logos::{Lexer, Logos};
use tracing::trace;

/// Raw token from logos, before keyword resolution.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    #[regex(r"[ \t\x0C]+")]
    Space,

    #[regex(r"\r?\n")]
    Linebreak,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // Non-ASCII code points are accepted as identifier characters so that
    // every byte sequence lands in some token.
    #[regex(r"[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*")]
    Word,

    #[regex(r"`[^`\r\n]+`")]
    #[regex(r"\$[A-Za-z0-9_]+")]
    SpecialIdent,

    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    Attribute,

    #[regex(r"#[A-Za-z_][A-Za-z0-9_]*")]
    Directive,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9_]+)?")]
    #[regex(r"0x[0-9A-Fa-f_]+")]
    #[regex(r"0o[0-7_]+")]
    #[regex(r"0b[01_]+")]
    Number,

    #[token("\"", string_literal)]
    String,

    // `/` is kept out of operator runs so `/*` and `/**` always start comments.
    #[regex(r"[-+*%=<>!&|^~?]+")]
    #[regex(r"/=?")]
    Operator,

    // Dot operators may only begin with a dot: `.`, `...`, `..<`.
    #[regex(r"\.[-+*%=<>!&|^~?.]*")]
    DotOperator,

    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,

    // Remaining ASCII punctuation and control bytes, one at a time.
    #[regex(r"[,:;@#$'\\`\r\x00-\x08\x0E-\x1F\x7F\x0B]")]
    Punct,
}

fn block_comment(lex: &mut Lexer<RawToken>) {
    let len = scan::block_comment_len(lex.remainder());
    lex.bump(len);
}

fn string_literal(lex: &mut Lexer<RawToken>) -> bool {
    match scan::string_len(lex.remainder()) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => false,
    }
}

fn convert(raw: RawToken, text: &str) -> TokenKind {
    match raw {
        RawToken::Space => TokenKind::Space,
        RawToken::Linebreak => TokenKind::Linebreak,
        RawToken::LineComment | RawToken::BlockComment => TokenKind::Comment,
        RawToken::Word if keywords::is_reserved(text) => TokenKind::Keyword,
        RawToken::Word | RawToken::SpecialIdent => TokenKind::Identifier,
        RawToken::Attribute => TokenKind::Attribute,
        RawToken::Directive => TokenKind::Keyword,
        RawToken::Number => TokenKind::Number,
        RawToken::String => TokenKind::StringLiteral,
        RawToken::Operator | RawToken::DotOperator => TokenKind::Operator,
        RawToken::LeftBrace => TokenKind::StartOfScope(Delimiter::Brace),
        RawToken::RightBrace => TokenKind::EndOfScope(Delimiter::Brace),
        RawToken::LeftParen => TokenKind::StartOfScope(Delimiter::Paren),
        RawToken::RightParen => TokenKind::EndOfScope(Delimiter::Paren),
        RawToken::LeftBracket => TokenKind::StartOfScope(Delimiter::Bracket),
        RawToken::RightBracket => TokenKind::EndOfScope(Delimiter::Bracket),
        RawToken::Punct => TokenKind::Other,
    }
}

/// Tokenize Swift source text.
pub fn lex(source: &str) -> TokenList {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let kind = match result {
            Ok(raw) => convert(raw, text),
            // Only an unterminated string literal's opening quote gets here.
            Err(()) => TokenKind::Other,
        };
        tokens.push(Token::new(kind, text));
    }

    trace!(bytes = source.len(), tokens = tokens.len(), "lexed source");
    tokens
}
