//! Token model for bridgefmt.
//!
//! Every byte of a source file belongs to exactly one [`Token`], so a
//! [`TokenList`] can always be serialised back to the text it came from.
//! Rules mutate the list in place and the CLI renders it with
//! [`TokenList::to_source`].
//!
//! # Modules
//!
//! - [`kind`]: `TokenKind` and `Delimiter`
//! - [`list`]: `TokenList` with line and look-around helpers
//! - [`vocab`]: closed vocabulary of declaration modifiers and bridging attributes

pub mod kind;
pub mod list;
pub mod vocab;

use std::fmt;

pub use kind::{Delimiter, TokenKind};
pub use list::TokenList;
pub use vocab::{AccessLevel, BridgeAttribute, Modifier, ModifierRole};

/// A single lexical token: its kind plus the exact source text it covers.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn keyword(text: &str) -> Self {
        Token::new(TokenKind::Keyword, text)
    }

    pub fn identifier(text: &str) -> Self {
        Token::new(TokenKind::Identifier, text)
    }

    pub fn attribute(text: &str) -> Self {
        Token::new(TokenKind::Attribute, text)
    }

    pub fn space(text: &str) -> Self {
        Token::new(TokenKind::Space, text)
    }

    /// A Unix line break.
    pub fn linebreak() -> Self {
        Token::new(TokenKind::Linebreak, "\n")
    }

    #[inline]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    #[inline]
    pub fn is_linebreak(&self) -> bool {
        self.kind == TokenKind::Linebreak
    }

    #[inline]
    pub fn is_space_or_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Space | TokenKind::Comment)
    }

    #[inline]
    pub fn is_space_or_comment_or_linebreak(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Space | TokenKind::Comment | TokenKind::Linebreak
        )
    }

    #[inline]
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    #[inline]
    pub fn is_attribute(&self) -> bool {
        self.kind == TokenKind::Attribute
    }

    #[inline]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.is(TokenKind::Keyword, text)
    }

    /// The member-access `.` operator, as in `super.init(...)` or `.init()`.
    #[inline]
    pub fn is_member_access(&self) -> bool {
        self.is(TokenKind::Operator, ".")
    }

    /// A `<` directly after a declared type name opens its generic parameters.
    #[inline]
    pub fn opens_generic_params(&self) -> bool {
        self.is(TokenKind::Operator, "<")
    }

    #[inline]
    pub fn is_start_of_scope(&self, delimiter: Delimiter) -> bool {
        self.kind == TokenKind::StartOfScope(delimiter)
    }

    #[inline]
    pub fn is_end_of_scope(&self, delimiter: Delimiter) -> bool {
        self.kind == TokenKind::EndOfScope(delimiter)
    }

    /// Classify this token as a declaration modifier, if it is one.
    ///
    /// Modifiers may be lexed as keywords (`public`, `static`) or as plain
    /// identifiers (`override`, `convenience`); both are accepted.
    pub fn modifier(&self) -> Option<Modifier> {
        match self.kind {
            TokenKind::Keyword | TokenKind::Identifier => Modifier::from_text(&self.text),
            _ => None,
        }
    }

    /// Classify this token as a bridging attribute, if it is an attribute.
    pub fn bridge_attribute(&self) -> Option<BridgeAttribute> {
        if self.is_attribute() {
            Some(BridgeAttribute::from_text(&self.text))
        } else {
            None
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests;
