//! Rule registry and pipeline.

use bridgefmt_token::TokenList;
use tracing::debug;

use crate::add_dynamic::AddDynamic;
use crate::options::FormatOptions;

/// A token-rewriting rule.
///
/// Rules decide for themselves, from `options`, whether they run.
pub trait FormatRule: Sync {
    /// Camel-case rule name, e.g. `addDynamic`.
    fn name(&self) -> &'static str;
    /// One-line description.
    fn help(&self) -> &'static str;
    /// Option keys that configure the rule, without the leading `--`.
    fn options(&self) -> &'static [&'static str];
    fn apply(&self, tokens: &mut TokenList, options: &FormatOptions);
}

static ADD_DYNAMIC: AddDynamic = AddDynamic;
static RULES: [&dyn FormatRule; 1] = [&ADD_DYNAMIC];

/// Every registered rule, in the order they run.
pub fn all_rules() -> &'static [&'static dyn FormatRule] {
    &RULES
}

/// Run every rule over `tokens`.
pub fn format_tokens(tokens: &mut TokenList, options: &FormatOptions) {
    for rule in all_rules() {
        debug!(rule = rule.name(), "applying rule");
        rule.apply(tokens, options);
    }
}

/// Lex `source`, run every rule, and render the result.
pub fn format_source(source: &str, options: &FormatOptions) -> String {
    let mut tokens = bridgefmt_lexer::lex(source);
    format_tokens(&mut tokens, options);
    tokens.to_source()
}

#[cfg(test)]
mod tests;
