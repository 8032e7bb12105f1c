use pretty_assertions::assert_eq;

use super::*;

fn list(tokens: Vec<Token>) -> TokenList {
    TokenList::from_vec(tokens)
}

fn open(d: Delimiter) -> Token {
    Token::new(TokenKind::StartOfScope(d), d.open())
}

fn close(d: Delimiter) -> Token {
    Token::new(TokenKind::EndOfScope(d), d.close())
}

// === Token predicates ===

#[test]
fn member_access_is_only_a_lone_dot_operator() {
    assert!(Token::new(TokenKind::Operator, ".").is_member_access());
    assert!(!Token::new(TokenKind::Operator, "...").is_member_access());
    assert!(!Token::new(TokenKind::Other, ".").is_member_access());
}

#[test]
fn generic_open_is_the_less_than_operator() {
    assert!(Token::new(TokenKind::Operator, "<").opens_generic_params());
    assert!(!Token::new(TokenKind::Operator, "<=").opens_generic_params());
}

#[test]
fn whitespace_predicates() {
    let space = Token::space("  ");
    let comment = Token::new(TokenKind::Comment, "// x");
    let linebreak = Token::linebreak();

    assert!(space.is_space_or_comment());
    assert!(comment.is_space_or_comment());
    assert!(!linebreak.is_space_or_comment());
    assert!(linebreak.is_space_or_comment_or_linebreak());
    assert!(!Token::keyword("func").is_space_or_comment_or_linebreak());
}

#[test]
fn modifiers_accept_keywords_and_identifiers() {
    assert_eq!(
        Token::keyword("public").modifier(),
        Some(Modifier::Access(AccessLevel::Public))
    );
    assert_eq!(
        Token::identifier("override").modifier(),
        Some(Modifier::Override)
    );
    assert_eq!(Token::attribute("@objc").modifier(), None);
    assert_eq!(Token::identifier("foo").modifier(), None);
}

#[test]
fn bridge_attribute_classification() {
    assert_eq!(
        Token::attribute("@objcMembers").bridge_attribute(),
        Some(BridgeAttribute::ObjcMembers)
    );
    assert_eq!(
        Token::attribute("@objc").bridge_attribute(),
        Some(BridgeAttribute::Objc)
    );
    assert_eq!(
        Token::attribute("@nonobjc").bridge_attribute(),
        Some(BridgeAttribute::Nonobjc)
    );
    assert_eq!(
        Token::attribute("@available").bridge_attribute(),
        Some(BridgeAttribute::Other)
    );
    assert_eq!(Token::identifier("objc").bridge_attribute(), None);
}

// === Vocabulary ===

#[test]
fn modifier_roles() {
    let role = |text: &str| Modifier::from_text(text).map(Modifier::role);
    assert_eq!(role("override"), Some(ModifierRole::Override));
    assert_eq!(role("open"), Some(ModifierRole::AccessLevel));
    assert_eq!(role("fileprivate"), Some(ModifierRole::AccessLevel));
    assert_eq!(role("private"), Some(ModifierRole::RestrictedVisibility));
    assert_eq!(role("static"), Some(ModifierRole::TypeLevel));
    assert_eq!(role("class"), Some(ModifierRole::TypeLevel));
    assert_eq!(role("dynamic"), Some(ModifierRole::Dispatch));
    assert_eq!(role("final"), Some(ModifierRole::Other));
    assert_eq!(role("func"), None);
}

#[test]
fn modifier_vocabulary_is_closed() {
    for text in [
        "override",
        "open",
        "public",
        "internal",
        "fileprivate",
        "private",
        "static",
        "class",
        "dynamic",
        "final",
        "required",
        "convenience",
        "mutating",
        "nonmutating",
        "lazy",
        "weak",
        "unowned",
        "optional",
        "indirect",
        "prefix",
        "postfix",
        "infix",
        "nonisolated",
    ] {
        assert!(Modifier::from_text(text).is_some(), "{text} is a modifier");
    }
    for text in ["objc", "func", "Dynamic", "privateSet", ""] {
        assert_eq!(Modifier::from_text(text), None);
    }
}

// === TokenList ===

#[test]
fn start_of_line_after_linebreak() {
    let tokens = list(vec![
        Token::keyword("class"),
        Token::linebreak(),
        Token::space("    "),
        Token::keyword("func"),
    ]);
    assert_eq!(tokens.start_of_line(3), 2);
    assert_eq!(tokens.start_of_line(0), 0);
    assert_eq!(tokens.start_of_line(1), 0);
    assert_eq!(tokens.indent_at(2).map(|t| t.text.as_str()), Some("    "));
    assert!(tokens.indent_at(0).is_none());
}

#[test]
fn significant_neighbours_skip_trivia() {
    let tokens = list(vec![
        Token::keyword("class"),
        Token::space(" "),
        Token::new(TokenKind::Comment, "/* c */"),
        Token::linebreak(),
        Token::identifier("Foo"),
    ]);
    assert_eq!(tokens.next_significant(0), Some(4));
    assert_eq!(tokens.prev_significant(4), Some(0));
    assert_eq!(tokens.next_non_space(0), Some(3));
    assert_eq!(tokens.next_significant(4), None);
    assert_eq!(tokens.prev_significant(0), None);
}

#[test]
fn matching_open_handles_nesting() {
    let tokens = list(vec![
        open(Delimiter::Paren),
        open(Delimiter::Paren),
        close(Delimiter::Paren),
        close(Delimiter::Paren),
    ]);
    assert_eq!(tokens.matching_open(3), Some(0));
    assert_eq!(tokens.matching_open(2), Some(1));
    assert_eq!(tokens.matching_open(0), None);
}

#[test]
fn matching_open_missing_opener() {
    let tokens = list(vec![Token::identifier("x"), close(Delimiter::Paren)]);
    assert_eq!(tokens.matching_open(1), None);
}

#[test]
fn insert_and_replace() {
    let mut tokens = list(vec![Token::keyword("func"), Token::identifier("f")]);
    tokens.insert(0, [Token::keyword("dynamic"), Token::space(" ")]);
    tokens.replace(3, Token::identifier("g"));
    tokens.replace(99, Token::identifier("ignored"));
    assert_eq!(tokens.to_source(), "dynamic funcg");
}

#[test]
fn insert_past_end_appends() {
    let mut tokens = list(vec![Token::identifier("a")]);
    tokens.insert(10, [Token::identifier("b")]);
    assert_eq!(tokens.to_source(), "ab");
}
