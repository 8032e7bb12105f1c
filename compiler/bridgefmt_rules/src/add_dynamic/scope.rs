//! Nested type-scope tracking over a flat token stream.
//!
//! The tracker follows brace depth and keeps one [`ScopeRecord`] per open
//! type body. A type keyword only produces a pending record: its depth is
//! unknown until the `{` that opens the body is reached, which may be
//! several lines and a conformance list later.

use bridgefmt_token::{BridgeAttribute, Token, TokenKind, TokenList};
use smallvec::SmallVec;
use tracing::trace;

use super::prefix::DeclarationPrefix;

/// Keywords that start a declaration of their own. Seeing one before the
/// `{` means the pending type keyword had no body.
const ENDS_TYPE_HEADER: [&str; 9] = [
    "func", "init", "deinit", "subscript", "var", "let", "typealias", "protocol", "import",
];

/// Which nominal type declaration opened a scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Struct,
    Enum,
    Extension,
}

impl DeclKind {
    /// Classify a type-declaration keyword.
    pub fn from_token(token: &Token) -> Option<Self> {
        if token.kind != TokenKind::Keyword {
            return None;
        }
        match token.text.as_str() {
            "class" => Some(DeclKind::Class),
            "struct" => Some(DeclKind::Struct),
            "enum" => Some(DeclKind::Enum),
            "extension" => Some(DeclKind::Extension),
            _ => None,
        }
    }

    /// Whether the keyword must be followed by a type name to count.
    fn requires_name(self) -> bool {
        !matches!(self, DeclKind::Extension)
    }
}

/// Metadata for one open type body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeRecord {
    pub kind: DeclKind,
    /// Brace depth inside the body.
    pub depth: usize,
    pub is_generic: bool,
    pub is_opted_out: bool,
}

impl ScopeRecord {
    /// A class body whose members may receive the dispatch modifier.
    pub fn is_eligible_class(&self) -> bool {
        self.kind == DeclKind::Class && !self.is_generic && !self.is_opted_out
    }
}

/// A type declaration seen at its keyword, waiting for its opening brace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingScope {
    pub kind: DeclKind,
    pub is_generic: bool,
    pub is_opted_out: bool,
}

impl PendingScope {
    pub fn is_eligible_class(&self) -> bool {
        self.kind == DeclKind::Class && !self.is_generic && !self.is_opted_out
    }
}

/// Brace depth plus a stack of open type scopes.
///
/// Record depths strictly increase from bottom to top.
#[derive(Debug, Default)]
pub struct ScopeTracker {
    depth: usize,
    stack: SmallVec<[ScopeRecord; 8]>,
    pending: Option<PendingScope>,
}

impl ScopeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The innermost open type scope.
    pub fn top(&self) -> Option<&ScopeRecord> {
        self.stack.last()
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<&PendingScope> {
        self.pending.as_ref()
    }

    /// Record the type keyword at `index` as the pending scope.
    ///
    /// Returns the pending scope, or `None` when the keyword is not a type
    /// declaration (a `class` without a following name, for instance the
    /// `class` modifier in `class func` or `class override var`, or the
    /// kind in `import class UIKit.UIView`). A later type keyword replaces
    /// an unopened pending scope.
    pub fn declare(&mut self, tokens: &TokenList, index: usize) -> Option<PendingScope> {
        let kind = DeclKind::from_token(&tokens[index])?;
        if tokens
            .prev_significant(index)
            .is_some_and(|i| tokens[i].is_keyword("import"))
        {
            return None;
        }
        let next = tokens.next_significant(index);
        let name = next.filter(|&i| {
            let token = &tokens[i];
            token.is_identifier() && token.modifier().is_none()
        });
        if kind.requires_name() && name.is_none() {
            return None;
        }

        let opens_generics = name
            .and_then(|i| tokens.next_significant(i))
            .is_some_and(|i| tokens[i].opens_generic_params());
        let in_generic_scope = self.stack.iter().any(|record| record.is_generic);
        let is_opted_out =
            DeclarationPrefix::scan(tokens, index).has_attribute(BridgeAttribute::Nonobjc);

        let pending = PendingScope {
            kind,
            is_generic: opens_generics || in_generic_scope,
            is_opted_out,
        };
        self.pending = Some(pending);
        Some(pending)
    }

    /// Discard the pending scope if `token` starts another declaration.
    pub fn interrupt(&mut self, token: &Token) {
        let ends_header =
            token.kind == TokenKind::Keyword && ENDS_TYPE_HEADER.contains(&token.text.as_str());
        if !ends_header {
            return;
        }
        if let Some(pending) = self.pending.take() {
            trace!(?pending, keyword = %token.text, "discard bodyless scope");
        }
    }

    /// Enter a `{`. A pending scope becomes the body opened here.
    pub fn open_brace(&mut self) {
        self.depth += 1;
        if let Some(pending) = self.pending.take() {
            let record = ScopeRecord {
                kind: pending.kind,
                depth: self.depth,
                is_generic: pending.is_generic,
                is_opted_out: pending.is_opted_out,
            };
            trace!(?record, "push scope");
            self.stack.push(record);
        }
    }

    /// Leave a `}`, popping every scope it closes.
    ///
    /// An unbalanced `}` leaves the depth at zero.
    pub fn close_brace(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        while let Some(record) = self.stack.last() {
            if record.depth <= self.depth {
                break;
            }
            trace!(?record, "pop scope");
            self.stack.pop();
        }
    }
}
