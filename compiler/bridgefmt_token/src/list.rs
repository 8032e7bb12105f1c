//! Mutable token buffer with look-around helpers.

use std::fmt;

use super::{Token, TokenKind};

/// An ordered, mutable sequence of tokens for one source file.
///
/// Positions are 0-based indices and shift after an insertion, so callers
/// that plan several edits should anchor them on the unmodified buffer and
/// apply them from the highest index down.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Insert `tokens` so that the first of them lands at `index`.
    ///
    /// An `index` equal to `len()` appends. Larger indices are clamped to
    /// the end of the buffer.
    pub fn insert<I>(&mut self, index: usize, tokens: I)
    where
        I: IntoIterator<Item = Token>,
    {
        let index = index.min(self.tokens.len());
        self.tokens.splice(index..index, tokens);
    }

    /// Replace the token at `index`. Out-of-range indices are ignored.
    pub fn replace(&mut self, index: usize, token: Token) {
        if let Some(slot) = self.tokens.get_mut(index) {
            *slot = token;
        }
    }

    /// Index of the first token on the line containing `index`.
    pub fn start_of_line(&self, index: usize) -> usize {
        let end = index.min(self.tokens.len());
        self.tokens[..end]
            .iter()
            .rposition(Token::is_linebreak)
            .map_or(0, |pos| pos + 1)
    }

    /// Leading indentation of the line that starts at `line_start`, if any.
    pub fn indent_at(&self, line_start: usize) -> Option<&Token> {
        self.tokens
            .get(line_start)
            .filter(|token| token.kind == TokenKind::Space)
    }

    /// Next token after `index` that is not whitespace, a comment or a line break.
    pub fn next_significant(&self, index: usize) -> Option<usize> {
        (index + 1..self.tokens.len())
            .find(|&i| !self.tokens[i].is_space_or_comment_or_linebreak())
    }

    /// Previous token before `index` that is not whitespace, a comment or a line break.
    pub fn prev_significant(&self, index: usize) -> Option<usize> {
        let end = index.min(self.tokens.len());
        (0..end)
            .rev()
            .find(|&i| !self.tokens[i].is_space_or_comment_or_linebreak())
    }

    /// Next token after `index` that is not whitespace or a comment.
    ///
    /// Unlike [`next_significant`](Self::next_significant), a line break
    /// is returned rather than skipped.
    pub fn next_non_space(&self, index: usize) -> Option<usize> {
        (index + 1..self.tokens.len()).find(|&i| !self.tokens[i].is_space_or_comment())
    }

    /// Index of the opener matching the closing delimiter at `close`.
    ///
    /// Returns `None` when `close` is not a closing delimiter or the opener
    /// is missing.
    pub fn matching_open(&self, close: usize) -> Option<usize> {
        let TokenKind::EndOfScope(delimiter) = self.tokens.get(close)?.kind else {
            return None;
        };
        let mut depth = 0usize;
        for i in (0..close).rev() {
            let token = &self.tokens[i];
            if token.is_end_of_scope(delimiter) {
                depth += 1;
            } else if token.is_start_of_scope(delimiter) {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
        }
        None
    }

    /// Render the buffer back to source text.
    pub fn to_source(&self) -> String {
        let capacity = self.tokens.iter().map(|t| t.text.len()).sum();
        let mut out = String::with_capacity(capacity);
        for token in &self.tokens {
            out.push_str(&token.text);
        }
        out
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
