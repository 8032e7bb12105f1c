//! Class-wide `@objcMembers` planning.
//!
//! # Decision
//!
//! Evaluated once per eligible class keyword:
//!
//! - `@objcMembers` already in the prefix: nothing to do.
//! - A bare `@objc` in front of the class: replaced in place.
//! - A parameterised `@objc(Name)` on the class line: `@objcMembers` goes on
//!   its own line in front of it and `@objc(Name)` is kept.
//! - Otherwise `@objcMembers` goes on its own line above the declaration,
//!   at the declaration's indentation. A class that does not start its
//!   line gets the attribute inline.
//!
//! On lines above the class only attributes are looked through. Anything
//! else ends the search, including the `)` of an attribute's arguments, so
//! `@objc(Name)` on the line above is left where it is and `@objcMembers`
//! lands between it and the class.

use bridgefmt_token::{vocab, BridgeAttribute, Delimiter, Token, TokenKind, TokenList};
use smallvec::{smallvec, SmallVec};

use super::prefix::DeclarationPrefix;
use crate::edit::Edit;

/// What to do with one class declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassAnnotation {
    AlreadyAnnotated,
    /// Replace the bare `@objc` at this index.
    ReplaceBare(usize),
    /// Insert a new `@objcMembers` line in front of the parameterised
    /// `@objc` at this index.
    InsertBeforeParameterized(usize),
    /// Insert a new `@objcMembers` line at this index, the start of the
    /// declaration on the class keyword's line.
    InsertFresh(usize),
}

impl ClassAnnotation {
    /// Decide the annotation for the class keyword at `keyword`.
    pub fn plan(tokens: &TokenList, keyword: usize) -> Self {
        let prefix = DeclarationPrefix::scan(tokens, keyword);
        if prefix.has_attribute(BridgeAttribute::ObjcMembers)
            || prefix.has_attribute(BridgeAttribute::Nonobjc)
        {
            return ClassAnnotation::AlreadyAnnotated;
        }

        let objc = prefix
            .attribute_on_keyword_line(BridgeAttribute::Objc)
            .map(|item| item.index)
            .or_else(|| objc_on_lines_above(tokens, keyword));

        match objc {
            Some(index) if has_arguments(tokens, index) => {
                ClassAnnotation::InsertBeforeParameterized(index)
            }
            Some(index) => ClassAnnotation::ReplaceBare(index),
            None => ClassAnnotation::InsertFresh(prefix.line_start()),
        }
    }

    /// The buffer edit for this decision, if any.
    pub fn edit(self, tokens: &TokenList) -> Option<Edit> {
        match self {
            ClassAnnotation::AlreadyAnnotated => None,
            ClassAnnotation::ReplaceBare(at) => {
                Some(Edit::replace(at, Token::attribute(vocab::OBJC_MEMBERS)))
            }
            ClassAnnotation::InsertBeforeParameterized(at) | ClassAnnotation::InsertFresh(at) => {
                Some(Edit::insert(at, own_line(tokens, at)))
            }
        }
    }
}

/// `@objcMembers` on its own line in front of `at`, at the indentation of
/// the line holding `at`. The line break matches the file's first one.
///
/// When `at` is not the first token on its line the attribute is inserted
/// inline instead, followed by a space.
fn own_line(tokens: &TokenList, at: usize) -> SmallVec<[Token; 3]> {
    let line_start = tokens.start_of_line(at);
    let attribute = Token::attribute(vocab::OBJC_MEMBERS);
    if !(line_start..at).all(|i| tokens[i].kind == TokenKind::Space) {
        return smallvec![attribute, Token::space(" ")];
    }

    let linebreak = tokens
        .iter()
        .find(|token| token.is_linebreak())
        .cloned()
        .unwrap_or_else(Token::linebreak);
    let mut run = smallvec![attribute, linebreak];
    run.extend(tokens.indent_at(line_start).cloned());
    run
}

/// Search the lines above the class keyword for `@objc`, looking through
/// attributes, whitespace, comments and line breaks only. The `@objc` must
/// sit on a line that holds nothing else but attributes.
fn objc_on_lines_above(tokens: &TokenList, keyword: usize) -> Option<usize> {
    let line_start = tokens.start_of_line(keyword);
    let found = (0..line_start)
        .rev()
        .take_while(|&i| {
            let token = &tokens[i];
            token.is_space_or_comment_or_linebreak() || token.is_attribute()
        })
        .find(|&i| tokens[i].bridge_attribute() == Some(BridgeAttribute::Objc))?;

    let own_line = (tokens.start_of_line(found)..found).all(|i| {
        let token = &tokens[i];
        token.is_space_or_comment() || token.is_attribute()
    });
    own_line.then_some(found)
}

/// Whether the attribute at `index` is directly followed by `(`.
fn has_arguments(tokens: &TokenList, index: usize) -> bool {
    tokens
        .next_non_space(index)
        .is_some_and(|next| tokens[next].is_start_of_scope(Delimiter::Paren))
}
