//! The `rules` command: list the registered rules.

use std::fmt::Write as _;

use bridgefmt_rules::{all_rules, FormatRule};

/// Name, help text and option keys of each rule.
pub fn render_rules(rules: &[&dyn FormatRule]) -> String {
    let mut output = String::new();
    for rule in rules {
        let _ = writeln!(output, "{}", rule.name());
        let _ = writeln!(output, "  {}", rule.help());
        for option in rule.options() {
            let _ = writeln!(output, "  --{option} [true|false]");
        }
    }
    output
}

pub fn list_rules() {
    print!("{}", render_rules(all_rules()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_add_dynamic() {
        assert_eq!(
            render_rules(all_rules()),
            "addDynamic\n  Add dynamic keyword to function declarations and @objcMembers to \
             classes.\n  --add-dynamic [true|false]\n"
        );
    }

    #[test]
    fn every_listed_option_parses() {
        for rule in all_rules() {
            for option in rule.options() {
                assert!(bridgefmt_rules::FormatOptions::is_option(option));
            }
        }
    }
}
