use pretty_assertions::assert_eq;

use super::*;

#[test]
fn registry_lists_add_dynamic() {
    let names: Vec<_> = all_rules().iter().map(|rule| rule.name()).collect();
    assert_eq!(names, vec!["addDynamic"]);
}

#[test]
fn format_source_with_defaults_is_identity() {
    let source = "class T: NSObject {\n    func m() {}\n}\n";
    assert_eq!(format_source(source, &FormatOptions::default()), source);
}

#[test]
fn format_source_with_add_dynamic() {
    let options = FormatOptions { add_dynamic: true };
    assert_eq!(
        format_source("class T: NSObject {\n    func m() {}\n}\n", &options),
        "@objcMembers\nclass T: NSObject {\n    dynamic func m() {}\n}\n"
    );
}

#[test]
fn format_tokens_in_place() {
    let mut tokens = bridgefmt_lexer::lex("class G<T> { func m() {} }");
    format_tokens(&mut tokens, &FormatOptions { add_dynamic: true });
    assert_eq!(tokens.to_source(), "class G<T> { func m() {} }");
}
