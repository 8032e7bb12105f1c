//! Reserved word table.
//!
//! Only words Swift reserves in declaration and statement position are
//! classified as keywords. Contextual words (`override`, `dynamic`, `final`,
//! `open`, `convenience`, ...) stay identifiers; rules that care about them
//! classify the text through `Modifier::from_text` regardless of kind.
//!
//! The lookup buckets by length first, so most identifiers are rejected
//! after a single comparison.

/// Whether `text` is a reserved word.
#[inline]
pub(crate) fn is_reserved(text: &str) -> bool {
    let len = text.len();
    if !(2..=15).contains(&len) {
        return false;
    }

    match len {
        2 => matches!(text, "as" | "do" | "if" | "in" | "is"),
        3 => matches!(text, "Any" | "for" | "let" | "nil" | "try" | "var"),
        4 => matches!(
            text,
            "case" | "else" | "enum" | "func" | "init" | "Self" | "self" | "true"
        ),
        5 => matches!(
            text,
            "break"
                | "catch"
                | "class"
                | "defer"
                | "false"
                | "guard"
                | "inout"
                | "super"
                | "throw"
                | "where"
                | "while"
        ),
        6 => matches!(
            text,
            "deinit"
                | "import"
                | "public"
                | "repeat"
                | "return"
                | "static"
                | "struct"
                | "switch"
                | "throws"
        ),
        7 => matches!(text, "default" | "private"),
        8 => matches!(
            text,
            "continue" | "internal" | "operator" | "protocol" | "rethrows"
        ),
        9 => matches!(text, "extension" | "subscript" | "typealias"),
        11 => matches!(text, "fallthrough" | "fileprivate"),
        14 => text == "associatedtype",
        15 => text == "precedencegroup",
        _ => false,
    }
}
