//! Token kinds.

use std::fmt;

/// Paired delimiters that open and close a lexical scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `{` / `}`
    Brace,
    /// `(` / `)`
    Paren,
    /// `[` / `]`
    Bracket,
}

impl Delimiter {
    pub fn open(self) -> &'static str {
        match self {
            Delimiter::Brace => "{",
            Delimiter::Paren => "(",
            Delimiter::Bracket => "[",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Delimiter::Brace => "}",
            Delimiter::Paren => ")",
            Delimiter::Bracket => "]",
        }
    }
}

/// What a token is, independent of its text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word: `class`, `func`, `init`, `static`, `public`, ...
    Keyword,
    /// Plain or back-ticked identifier, including contextual words such as `override`.
    Identifier,
    /// `@name` attribute; arguments, if any, follow as separate tokens.
    Attribute,
    /// Operator run: `.`, `->`, `<`, `==`, `..<`, ...
    Operator,
    /// Numeric literal.
    Number,
    /// String literal, including any interpolated segments.
    StringLiteral,
    /// Horizontal whitespace.
    Space,
    /// Line or block comment.
    Comment,
    /// `\n` or `\r\n`.
    Linebreak,
    StartOfScope(Delimiter),
    EndOfScope(Delimiter),
    /// Punctuation and anything the lexer could not classify.
    Other,
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword => f.write_str("Keyword"),
            TokenKind::Identifier => f.write_str("Identifier"),
            TokenKind::Attribute => f.write_str("Attribute"),
            TokenKind::Operator => f.write_str("Operator"),
            TokenKind::Number => f.write_str("Number"),
            TokenKind::StringLiteral => f.write_str("String"),
            TokenKind::Space => f.write_str("Space"),
            TokenKind::Comment => f.write_str("Comment"),
            TokenKind::Linebreak => f.write_str("Linebreak"),
            TokenKind::StartOfScope(d) => write!(f, "StartOfScope({})", d.open()),
            TokenKind::EndOfScope(d) => write!(f, "EndOfScope({})", d.close()),
            TokenKind::Other => f.write_str("Other"),
        }
    }
}
