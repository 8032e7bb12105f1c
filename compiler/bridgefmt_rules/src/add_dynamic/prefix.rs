//! Backward scan over a declaration's attribute and modifier prefix.
//!
//! Starting just before a declaration keyword (`class`, `func`, `init`),
//! the scan collects attributes (with their parenthesised arguments) and
//! modifiers until it meets any other token. Earlier lines contribute only
//! when the whole line consists of prefix items, so `@objc` on its own line
//! above a method belongs to it while `let state = .open` does not.

use bridgefmt_token::{BridgeAttribute, Delimiter, Modifier, ModifierRole, TokenList};
use smallvec::SmallVec;

/// What a prefix item is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixKind {
    Modifier(Modifier),
    Attribute(BridgeAttribute),
}

/// One attribute or modifier found in a declaration prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixItem {
    /// Index of the attribute or modifier word.
    pub index: usize,
    /// Index of the item's last token: the closing `)` when it has
    /// arguments, otherwise `index`.
    pub end: usize,
    pub kind: PrefixKind,
    /// Whether the item shares a line with the declaration keyword.
    pub on_keyword_line: bool,
}

impl PrefixItem {
    pub fn has_arguments(&self) -> bool {
        self.end != self.index
    }

    /// Ordering role of a modifier item; `None` for attributes.
    ///
    /// `private(set)` restricts only a setter, so it does not count as
    /// restricted visibility for the declaration itself.
    pub fn role(&self) -> Option<ModifierRole> {
        match self.kind {
            PrefixKind::Modifier(modifier) => match modifier.role() {
                ModifierRole::RestrictedVisibility if self.has_arguments() => {
                    Some(ModifierRole::Other)
                }
                role => Some(role),
            },
            PrefixKind::Attribute(_) => None,
        }
    }
}

/// The attributes and modifiers in front of one declaration keyword.
///
/// Items are stored in encounter order, nearest to the keyword first.
#[derive(Clone, Debug, Default)]
pub struct DeclarationPrefix {
    keyword: usize,
    items: SmallVec<[PrefixItem; 4]>,
}

impl DeclarationPrefix {
    /// Scan backward from the declaration keyword at `keyword`.
    pub fn scan(tokens: &TokenList, keyword: usize) -> Self {
        let mut items: SmallVec<[PrefixItem; 4]> = SmallVec::new();
        // Items from a line above the keyword, committed once the whole
        // line has been seen to hold nothing else.
        let mut line: SmallVec<[PrefixItem; 4]> = SmallVec::new();
        let mut on_keyword_line = true;
        let mut i = keyword.min(tokens.len());

        loop {
            let Some(prev) = i.checked_sub(1) else {
                items.append(&mut line);
                break;
            };
            i = prev;

            let token = &tokens[i];
            if token.is_linebreak() {
                items.append(&mut line);
                on_keyword_line = false;
                continue;
            }
            if token.is_space_or_comment() {
                continue;
            }

            let Some(item) = Self::item_ending_at(tokens, i, on_keyword_line) else {
                break;
            };
            i = item.index;
            if on_keyword_line {
                items.push(item);
            } else {
                line.push(item);
            }
        }

        DeclarationPrefix { keyword, items }
    }

    /// Classify the prefix item whose last token is at `end`.
    fn item_ending_at(tokens: &TokenList, end: usize, on_keyword_line: bool) -> Option<PrefixItem> {
        let index = if tokens[end].is_end_of_scope(Delimiter::Paren) {
            let open = tokens.matching_open(end)?;
            tokens.prev_significant(open)?
        } else {
            end
        };

        let token = &tokens[index];
        let kind = if let Some(attribute) = token.bridge_attribute() {
            PrefixKind::Attribute(attribute)
        } else {
            PrefixKind::Modifier(token.modifier()?)
        };

        Some(PrefixItem {
            index,
            end,
            kind,
            on_keyword_line,
        })
    }

    pub fn keyword(&self) -> usize {
        self.keyword
    }

    pub fn items(&self) -> &[PrefixItem] {
        &self.items
    }

    pub fn has_attribute(&self, attribute: BridgeAttribute) -> bool {
        self.items
            .iter()
            .any(|item| item.kind == PrefixKind::Attribute(attribute))
    }

    pub fn has_role(&self, role: ModifierRole) -> bool {
        self.items.iter().any(|item| item.role() == Some(role))
    }

    /// Source-order first item with the given role.
    pub fn first_with_role(&self, role: ModifierRole) -> Option<&PrefixItem> {
        self.items
            .iter()
            .filter(|item| item.role() == Some(role))
            .min_by_key(|item| item.index)
    }

    /// Source-order last item with the given role.
    pub fn last_with_role(&self, role: ModifierRole) -> Option<&PrefixItem> {
        self.items
            .iter()
            .filter(|item| item.role() == Some(role))
            .max_by_key(|item| item.index)
    }

    /// Attribute of the given kind on the keyword's own line, nearest first.
    pub fn attribute_on_keyword_line(&self, attribute: BridgeAttribute) -> Option<&PrefixItem> {
        self.items
            .iter()
            .find(|item| item.on_keyword_line && item.kind == PrefixKind::Attribute(attribute))
    }

    /// Where the declaration starts on the keyword's line.
    ///
    /// This is the first prefix item sharing the keyword's line, or the
    /// keyword itself. On a conventionally formatted line it is the first
    /// token after the indentation.
    pub fn line_start(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.on_keyword_line)
            .map(|item| item.index)
            .min()
            .unwrap_or(self.keyword)
    }
}
