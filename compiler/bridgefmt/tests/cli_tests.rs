#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end formatting of files on disk.
//!
//! Each test builds a small project in a temp directory, runs the `fmt`
//! entry points over it and inspects the files afterwards.

use std::fs;
use std::path::Path;

use bridgefmt::commands::{format_directory, format_file, FormatConfig, FormatResult};
use bridgefmt::CONFIG_FILE;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const CONTROLLER: &str = "\
class Controller: NSObject {
    func load() {}
    private func reset() {}
}
";

const CONTROLLER_BRIDGED: &str = "\
@objcMembers
class Controller: NSObject {
    dynamic func load() {}
    @objc private dynamic func reset() {}
}
";

fn enabled() -> FormatConfig {
    FormatConfig {
        overrides: vec!["--add-dynamic".to_string()],
        ..FormatConfig::default()
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn formats_file_in_place() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Controller.swift");
    write(&file, CONTROLLER);

    assert!(matches!(format_file(&file, &enabled()), FormatResult::Formatted));
    assert_eq!(fs::read_to_string(&file).unwrap(), CONTROLLER_BRIDGED);

    assert!(matches!(format_file(&file, &enabled()), FormatResult::Unchanged));
}

#[test]
fn disabled_rule_leaves_file_alone() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Controller.swift");
    write(&file, CONTROLLER);

    assert!(matches!(
        format_file(&file, &FormatConfig::default()),
        FormatResult::Unchanged
    ));
    assert_eq!(fs::read_to_string(&file).unwrap(), CONTROLLER);
}

#[test]
fn check_mode_does_not_write() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Controller.swift");
    write(&file, CONTROLLER);

    let config = FormatConfig {
        check: true,
        ..enabled()
    };
    assert!(matches!(format_file(&file, &config), FormatResult::WouldFormat));
    assert_eq!(fs::read_to_string(&file).unwrap(), CONTROLLER);
}

#[test]
fn config_file_enables_rule() {
    let dir = tempdir().unwrap();
    write(&dir.path().join(CONFIG_FILE), "# bridging\n--add-dynamic\n");
    let file = dir.path().join("Sources").join("Controller.swift");
    write(&file, CONTROLLER);

    assert!(matches!(
        format_file(&file, &FormatConfig::default()),
        FormatResult::Formatted
    ));
    assert_eq!(fs::read_to_string(&file).unwrap(), CONTROLLER_BRIDGED);
}

#[test]
fn command_line_overrides_config_file() {
    let dir = tempdir().unwrap();
    write(&dir.path().join(CONFIG_FILE), "--add-dynamic true\n");
    let file = dir.path().join("Controller.swift");
    write(&file, CONTROLLER);

    let config = FormatConfig {
        overrides: vec!["--add-dynamic".to_string(), "false".to_string()],
        ..FormatConfig::default()
    };
    assert!(matches!(format_file(&file, &config), FormatResult::Unchanged));
}

#[test]
fn broken_config_is_reported() {
    let dir = tempdir().unwrap();
    write(&dir.path().join(CONFIG_FILE), "--add-dynamic\n--indent 4\n");
    let file = dir.path().join("Controller.swift");
    write(&file, CONTROLLER);

    match format_file(&file, &FormatConfig::default()) {
        FormatResult::Failed(err) => assert!(err.to_string().contains(":2: unknown option")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&file).unwrap(), CONTROLLER);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    match format_file(&dir.path().join("Missing.swift"), &enabled()) {
        FormatResult::Failed(err) => assert!(err.to_string().starts_with("cannot find file")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn directory_formatting_honours_ignores() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(&root.join("App").join("Controller.swift"), CONTROLLER);
    write(&root.join("App").join("Model.swift"), "struct Model {\n    func f() {}\n}\n");
    write(&root.join("Generated").join("Api.swift"), CONTROLLER);
    write(&root.join("Pods").join("Lib").join("Lib.swift"), CONTROLLER);
    write(&root.join(".bridgefmtignore"), "Generated\n");

    let (formatted, unchanged, errors) = format_directory(root, &enabled());
    assert_eq!((formatted, unchanged, errors), (1, 1, 0));

    assert_eq!(
        fs::read_to_string(root.join("App").join("Controller.swift")).unwrap(),
        CONTROLLER_BRIDGED
    );
    assert_eq!(
        fs::read_to_string(root.join("Generated").join("Api.swift")).unwrap(),
        CONTROLLER
    );
    assert_eq!(
        fs::read_to_string(root.join("Pods").join("Lib").join("Lib.swift")).unwrap(),
        CONTROLLER
    );
}

#[test]
fn no_ignore_formats_everything() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(&root.join("Generated").join("Api.swift"), CONTROLLER);
    write(&root.join("Pods").join("Lib.swift"), CONTROLLER);
    write(&root.join(".bridgefmtignore"), "Generated\n");

    let config = FormatConfig {
        no_ignore: true,
        ..enabled()
    };
    let (formatted, unchanged, errors) = format_directory(root, &config);
    assert_eq!((formatted, unchanged, errors), (2, 0, 0));
}
