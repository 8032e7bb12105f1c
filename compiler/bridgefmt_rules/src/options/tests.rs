use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_is_off() {
    assert!(!FormatOptions::default().add_dynamic);
}

#[test]
fn bare_flag_enables() {
    let mut options = FormatOptions::default();
    assert_eq!(options.apply_arg("--add-dynamic", Some("src")), Ok(false));
    assert!(options.add_dynamic);
}

#[test]
fn flag_with_separate_value() {
    let mut options = FormatOptions { add_dynamic: true };
    assert_eq!(options.apply_arg("--add-dynamic", Some("false")), Ok(true));
    assert!(!options.add_dynamic);
    assert_eq!(options.apply_arg("--add-dynamic", Some("true")), Ok(true));
    assert!(options.add_dynamic);
}

#[test]
fn flag_with_inline_value() {
    let mut options = FormatOptions { add_dynamic: true };
    assert_eq!(options.apply_arg("--add-dynamic=false", Some("true")), Ok(false));
    assert!(!options.add_dynamic);
}

#[test]
fn invalid_bool() {
    let mut options = FormatOptions::default();
    assert_eq!(
        options.apply_arg("--add-dynamic=yes", None),
        Err(OptionsError::InvalidBool {
            option: "add-dynamic".to_string(),
            value: "yes".to_string(),
        })
    );
}

#[test]
fn unknown_options() {
    let mut options = FormatOptions::default();
    assert_eq!(
        options.apply_arg("--indent", None),
        Err(OptionsError::UnknownOption("--indent".to_string()))
    );
    assert_eq!(
        options.apply_arg("add-dynamic", None),
        Err(OptionsError::UnknownOption("add-dynamic".to_string()))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        OptionsError::InvalidBool {
            option: "add-dynamic".to_string(),
            value: "1".to_string(),
        }
        .to_string(),
        "invalid value `1` for `--add-dynamic`: expected `true` or `false`"
    );
    assert_eq!(
        OptionsError::UnknownOption("--x".to_string()).to_string(),
        "unknown option `--x`"
    );
}

#[test]
fn option_keys() {
    assert!(FormatOptions::is_option("add-dynamic"));
    assert!(!FormatOptions::is_option("addDynamic"));
}
