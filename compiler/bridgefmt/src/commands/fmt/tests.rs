use super::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn run_config(list: &[&str]) -> (FormatConfig, Vec<String>) {
    match parse_fmt_args(&args(list)).unwrap() {
        FmtArgs::Run { config, paths } => (config, paths),
        FmtArgs::Help => panic!("unexpected help"),
    }
}

#[test]
fn test_parse_flags_and_paths() {
    let (config, paths) = run_config(&["--check", "Sources", "--no-ignore", "App.swift"]);
    assert!(config.check);
    assert!(config.no_ignore);
    assert!(!config.diff);
    assert_eq!(paths, vec!["Sources", "App.swift"]);
}

#[test]
fn test_parse_rule_option_with_value() {
    let (config, paths) = run_config(&["--add-dynamic", "false", "Sources"]);
    assert_eq!(config.overrides, vec!["--add-dynamic", "false"]);
    assert_eq!(paths, vec!["Sources"]);

    let (config, paths) = run_config(&["--add-dynamic", "Sources"]);
    assert_eq!(config.overrides, vec!["--add-dynamic"]);
    assert_eq!(paths, vec!["Sources"]);

    let (config, _) = run_config(&["--add-dynamic=true"]);
    assert_eq!(config.overrides, vec!["--add-dynamic=true"]);
}

#[test]
fn test_parse_rejects_bad_values() {
    let err = parse_fmt_args(&args(&["--add-dynamic=yes"])).unwrap_err();
    assert!(matches!(err, CliError::Options(_)));

    let err = parse_fmt_args(&args(&["--indent", "4"])).unwrap_err();
    assert!(err.to_string().starts_with("Unknown option: --indent"));
}

#[test]
fn test_parse_stdin_conflicts() {
    let err = parse_fmt_args(&args(&["--stdin", "App.swift"])).unwrap_err();
    assert_eq!(err.to_string(), "Cannot specify paths with --stdin");

    let err = parse_fmt_args(&args(&["--stdin", "--check"])).unwrap_err();
    assert_eq!(err.to_string(), "Cannot use --check with --stdin");

    assert!(parse_fmt_args(&args(&["--stdin", "--add-dynamic"])).is_ok());
}

#[test]
fn test_parse_help() {
    assert_eq!(parse_fmt_args(&args(&["-h"])).unwrap(), FmtArgs::Help);
}

#[test]
fn test_render_diff_insertions_and_changes() {
    let original = "class T {\n    func m() {}\n}\n";
    let formatted = "@objcMembers\nclass T {\n    dynamic func m() {}\n}\n";
    assert_eq!(
        render_diff("T.swift", original, formatted),
        "--- T.swift\n+++ T.swift\n\
         @@ -1,0 +1,1 @@\n+@objcMembers\n\
         @@ -1,2 +2,2 @@\n class T {\n-    func m() {}\n+    dynamic func m() {}\n"
    );
}

#[test]
fn test_render_diff_identical() {
    let source = "struct S {}\n";
    assert_eq!(
        render_diff("S.swift", source, source),
        "--- S.swift\n+++ S.swift\n"
    );
}

#[test]
fn test_is_ignored_patterns() {
    let root = Path::new("/project");
    let patterns = vec![
        "Generated".to_string(),
        "Sources/*.pb.swift".to_string(),
        "Vendor/**".to_string(),
        "Fixture.swift".to_string(),
    ];

    assert!(is_ignored(Path::new("/project/Generated/A.swift"), root, &patterns));
    assert!(is_ignored(Path::new("/project/Generated"), root, &patterns));
    assert!(is_ignored(Path::new("/project/Sources/Model.pb.swift"), root, &patterns));
    assert!(!is_ignored(Path::new("/project/Sources/Deep/Model.pb.swift"), root, &patterns));
    assert!(is_ignored(Path::new("/project/Vendor/Lib/X.swift"), root, &patterns));
    assert!(is_ignored(Path::new("/project/Tests/Fixture.swift"), root, &patterns));
    assert!(!is_ignored(Path::new("/project/Sources/App.swift"), root, &patterns));
    assert!(!is_ignored(Path::new("/elsewhere/Generated"), root, &patterns));
}

#[test]
fn test_load_ignore_patterns_skips_comments() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(IGNORE_FILE),
        "# generated code\nGenerated\n\n  Vendor/**  \n",
    )
    .unwrap();
    assert_eq!(load_ignore_patterns(dir.path()), vec!["Generated", "Vendor/**"]);
}

#[test]
fn test_visit_skips_default_ignores() {
    let dir = tempdir().unwrap();
    for sub in ["Pods", "DerivedData", ".build", "Sources"] {
        fs::create_dir(dir.path().join(sub)).unwrap();
        fs::write(dir.path().join(sub).join("A.swift"), "").unwrap();
    }
    fs::write(dir.path().join("README.md"), "").unwrap();

    let mut found = Vec::new();
    let config = FormatConfig::default();
    visit_swift_files(dir.path(), dir.path(), &config, &[], &mut |path| {
        found.push(path.to_path_buf());
    });
    assert_eq!(found, vec![dir.path().join("Sources").join("A.swift")]);

    let mut found = Vec::new();
    let config = FormatConfig {
        no_ignore: true,
        ..FormatConfig::default()
    };
    visit_swift_files(dir.path(), dir.path(), &config, &[], &mut |path| {
        found.push(path.to_path_buf());
    });
    assert_eq!(found.len(), 4);
}
