//! Decide whether a `func` or `init` keyword starts an eligible declaration.

use bridgefmt_token::{BridgeAttribute, ModifierRole, Token, TokenList};

use super::prefix::DeclarationPrefix;
use super::scope::{DeclKind, ScopeRecord, ScopeTracker};

/// A declaration that should receive the dispatch modifier.
#[derive(Clone, Debug)]
pub struct DeclarationCandidate {
    /// Index of the `func` or `init` keyword.
    pub index: usize,
    /// The class body the declaration sits in.
    pub scope: ScopeRecord,
    pub prefix: DeclarationPrefix,
}

/// Why a `func` or `init` keyword was left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Preceded by member access: `super.init(...)`, `.init()`.
    CallSite,
    /// Not directly inside a class body.
    NotInClassBody,
    GenericClass,
    /// The enclosing class is marked `@nonobjc`.
    OptedOutClass,
    AlreadyDynamic,
    /// The declaration itself is marked `@nonobjc`.
    OptedOutDeclaration,
}

/// Whether `token` is a keyword this rule annotates.
pub fn is_member_keyword(token: &Token) -> bool {
    token.is_keyword("func") || token.is_keyword("init")
}

/// Classify the member keyword at `index` given the scope state there.
///
/// Checks run in a fixed order: call site, enclosing scope, then the
/// declaration's own prefix.
pub fn classify(
    tokens: &TokenList,
    index: usize,
    tracker: &ScopeTracker,
) -> Result<DeclarationCandidate, Rejection> {
    if tokens
        .prev_significant(index)
        .is_some_and(|prev| tokens[prev].is_member_access())
    {
        return Err(Rejection::CallSite);
    }

    let scope = match tracker.top() {
        Some(record) if record.kind == DeclKind::Class && record.depth == tracker.depth() => {
            *record
        }
        _ => return Err(Rejection::NotInClassBody),
    };
    if scope.is_generic {
        return Err(Rejection::GenericClass);
    }
    if scope.is_opted_out {
        return Err(Rejection::OptedOutClass);
    }

    let prefix = DeclarationPrefix::scan(tokens, index);
    if prefix.has_role(ModifierRole::Dispatch) {
        return Err(Rejection::AlreadyDynamic);
    }
    if prefix.has_attribute(BridgeAttribute::Nonobjc) {
        return Err(Rejection::OptedOutDeclaration);
    }

    Ok(DeclarationCandidate {
        index,
        scope,
        prefix,
    })
}
