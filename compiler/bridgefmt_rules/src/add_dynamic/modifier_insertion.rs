//! Where `dynamic` goes in an eligible declaration.
//!
//! # Decision
//!
//! Modifiers end up ordered `override`, access level, `dynamic`,
//! `static`/`class`, keyword:
//!
//! 1. before the first `static` or `class` modifier,
//! 2. else after the last access-level modifier,
//! 3. else after `override`,
//! 4. else directly before `func`/`init`.
//!
//! A `private` declaration instead gets `dynamic` right after `private`,
//! plus `@objc` at the start of the declaration unless it already has one.
//!
//! # Example
//!
//! ```text
//! override public class func f()  ->  override public dynamic class func f()
//! private func g()                ->  @objc private dynamic func g()
//! ```

use bridgefmt_token::{vocab, BridgeAttribute, ModifierRole, Token, TokenList};
use smallvec::SmallVec;

use super::classify::DeclarationCandidate;
use super::prefix::PrefixItem;
use crate::edit::Edit;

/// Insertion points for one declaration, as indices into the unmodified
/// buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModifierInsertion {
    /// Where `@objc ` goes, for `private` declarations that lack it.
    pub objc_at: Option<usize>,
    /// Where `dynamic ` goes.
    pub dynamic_at: usize,
}

impl ModifierInsertion {
    pub fn plan(tokens: &TokenList, candidate: &DeclarationCandidate) -> Self {
        let prefix = &candidate.prefix;
        let after = |item: &PrefixItem| {
            tokens
                .next_significant(item.end)
                .unwrap_or(candidate.index)
        };

        if let Some(private) = prefix.first_with_role(ModifierRole::RestrictedVisibility) {
            let objc_at = if prefix.has_attribute(BridgeAttribute::Objc) {
                None
            } else {
                Some(prefix.line_start())
            };
            return ModifierInsertion {
                objc_at,
                dynamic_at: after(private),
            };
        }

        let type_level = prefix.first_with_role(ModifierRole::TypeLevel);
        let dynamic_at = if let Some(type_level) = type_level {
            type_level.index
        } else if let Some(access) = prefix.last_with_role(ModifierRole::AccessLevel) {
            after(access)
        } else if let Some(over) = prefix.last_with_role(ModifierRole::Override) {
            after(over)
        } else {
            candidate.index
        };

        ModifierInsertion {
            objc_at: None,
            dynamic_at,
        }
    }

    /// The edits for this declaration, applied together.
    pub fn edits(self) -> SmallVec<[Edit; 2]> {
        let mut edits = SmallVec::new();
        if let Some(at) = self.objc_at {
            edits.push(Edit::insert(at, [Token::attribute(vocab::OBJC), Token::space(" ")]));
        }
        edits.push(Edit::insert(
            self.dynamic_at,
            [Token::keyword(vocab::DYNAMIC), Token::space(" ")],
        ));
        edits
    }
}
