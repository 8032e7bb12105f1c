//! `addDynamic`: add `dynamic` to class members and `@objcMembers` to classes.
//!
//! # Decision
//!
//! One forward pass over the significant tokens:
//!
//! - braces and type keywords drive the [`ScopeTracker`], and any other
//!   declaration keyword drops a type keyword that never opened a body,
//! - an eligible class keyword gets a [`ClassAnnotation`],
//! - `func`/`init` keywords go through [`classify`] and, when eligible,
//!   get a [`ModifierInsertion`].
//!
//! Everything is planned against the unmodified buffer and applied once at
//! the end, so scanning never sees its own insertions.
//!
//! # Example
//!
//! ```text
//! class T: NSObject {              @objcMembers
//!     func m() {}            ->    class T: NSObject {
//!     private func q() {}              dynamic func m() {}
//! }                                    @objc private dynamic func q() {}
//!                                  }
//! ```

pub mod class_annotation;
pub mod classify;
pub mod modifier_insertion;
pub mod prefix;
pub mod scope;

pub use class_annotation::ClassAnnotation;
pub use classify::{classify, is_member_keyword, DeclarationCandidate, Rejection};
pub use modifier_insertion::ModifierInsertion;
pub use prefix::{DeclarationPrefix, PrefixItem, PrefixKind};
pub use scope::{DeclKind, PendingScope, ScopeRecord, ScopeTracker};

use bridgefmt_token::{Delimiter, TokenKind, TokenList};
use tracing::{debug, trace};

use crate::edit::EditPlan;
use crate::options::FormatOptions;
use crate::rule::FormatRule;

/// The `addDynamic` rule.
pub struct AddDynamic;

impl AddDynamic {
    pub const NAME: &'static str = "addDynamic";
    pub const HELP: &'static str =
        "Add dynamic keyword to function declarations and @objcMembers to classes.";
    pub const OPTION: &'static str = "add-dynamic";

    /// Plan every edit for `tokens` without touching the buffer.
    pub fn plan(tokens: &TokenList) -> EditPlan {
        let mut tracker = ScopeTracker::new();
        let mut plan = EditPlan::new();

        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::StartOfScope(Delimiter::Brace) => tracker.open_brace(),
                TokenKind::EndOfScope(Delimiter::Brace) => tracker.close_brace(),
                TokenKind::Keyword if DeclKind::from_token(token).is_some() => {
                    let Some(pending) = tracker.declare(tokens, index) else {
                        continue;
                    };
                    if pending.is_eligible_class() {
                        let annotation = ClassAnnotation::plan(tokens, index);
                        trace!(index, ?annotation, "class");
                        plan.push_entry(annotation.edit(tokens));
                    }
                }
                TokenKind::Keyword => {
                    tracker.interrupt(token);
                    if !is_member_keyword(token) {
                        continue;
                    }
                    match classify(tokens, index, &tracker) {
                        Ok(candidate) => {
                            let insertion = ModifierInsertion::plan(tokens, &candidate);
                            trace!(index, scope = ?candidate.scope, ?insertion, "member");
                            plan.push_entry(insertion.edits());
                        }
                        Err(rejection) => trace!(index, ?rejection, "member skipped"),
                    }
                }
                _ => {}
            }
        }
        plan
    }

    /// Apply the rule to `tokens`; returns the number of entries edited.
    pub fn run(tokens: &mut TokenList) -> usize {
        let plan = Self::plan(tokens);
        let planned = plan.entry_count();
        let applied = plan.apply(tokens);
        debug!(planned, applied, "addDynamic");
        applied
    }
}

impl FormatRule for AddDynamic {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn help(&self) -> &'static str {
        Self::HELP
    }

    fn options(&self) -> &'static [&'static str] {
        &[Self::OPTION]
    }

    fn apply(&self, tokens: &mut TokenList, options: &FormatOptions) {
        if options.add_dynamic {
            Self::run(tokens);
        }
    }
}
