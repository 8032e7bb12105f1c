//! Plan-then-apply token edits.
//!
//! Rules decide every edit against the unmodified buffer, anchoring each one
//! to an index in that buffer, and only then apply them. Edits are grouped
//! into entries (one class annotation, one declaration); an entry applies
//! completely or not at all.
//!
//! # Ordering
//!
//! Application runs from the highest index down, so no applied edit shifts
//! an anchor that is still pending. At a shared index a replacement goes
//! first, then insertions in reverse planning order, which leaves the
//! inserted runs in planning order in front of the anchor token.

use bridgefmt_token::{Token, TokenList};
use smallvec::SmallVec;
use tracing::trace;

/// Tokens inserted by one edit. The rules never insert more than three.
pub type InsertTokens = SmallVec<[Token; 3]>;

/// One buffer edit anchored to an index in the unmodified buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Insert `tokens` in front of the token at `at` (or at the end when
    /// `at` equals the buffer length).
    Insert { at: usize, tokens: InsertTokens },
    /// Replace the token at `at`.
    Replace { at: usize, token: Token },
}

impl Edit {
    pub fn insert(at: usize, tokens: impl IntoIterator<Item = Token>) -> Self {
        Edit::Insert {
            at,
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn replace(at: usize, token: Token) -> Self {
        Edit::Replace { at, token }
    }

    pub fn anchor(&self) -> usize {
        match self {
            Edit::Insert { at, .. } | Edit::Replace { at, .. } => *at,
        }
    }

    /// Whether the edit's anchor exists in a buffer of `len` tokens.
    fn fits(&self, len: usize) -> bool {
        match self {
            Edit::Insert { at, .. } => *at <= len,
            Edit::Replace { at, .. } => *at < len,
        }
    }

    /// Replacements sort before insertions at the same anchor.
    fn rank(&self) -> u8 {
        match self {
            Edit::Replace { .. } => 0,
            Edit::Insert { .. } => 1,
        }
    }
}

/// Edits for one token buffer, grouped into atomic entries.
#[derive(Clone, Debug, Default)]
pub struct EditPlan {
    entries: Vec<SmallVec<[Edit; 2]>>,
}

impl EditPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one atomic entry. Empty entries are ignored.
    pub fn push_entry(&mut self, edits: impl IntoIterator<Item = Edit>) {
        let entry: SmallVec<[Edit; 2]> = edits.into_iter().collect();
        if !entry.is_empty() {
            self.entries.push(entry);
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the plan to the buffer it was computed against.
    ///
    /// An entry with any anchor outside the buffer is dropped whole.
    /// Returns the number of entries applied.
    pub fn apply(self, tokens: &mut TokenList) -> usize {
        let len = tokens.len();
        let mut applied = 0;
        let mut accepted: Vec<Edit> = Vec::new();

        for entry in self.entries {
            if entry.iter().all(|edit| edit.fits(len)) {
                applied += 1;
                accepted.extend(entry);
            } else {
                trace!(?entry, len, "dropping edit entry with out-of-range anchor");
            }
        }

        let mut edits: Vec<(usize, Edit)> = accepted.into_iter().enumerate().collect();
        edits.sort_by(|(seq_a, a), (seq_b, b)| {
            b.anchor()
                .cmp(&a.anchor())
                .then(a.rank().cmp(&b.rank()))
                .then(seq_b.cmp(seq_a))
        });

        for (_, edit) in edits {
            match edit {
                Edit::Insert { at, tokens: run } => tokens.insert(at, run),
                Edit::Replace { at, token } => tokens.replace(at, token),
            }
        }
        applied
    }
}
