//! The `fmt` command: rewrite Swift source files.
//!
//! Supports single files, directories, and stdin.
//! Directories are processed in parallel once all files are collected.

#![allow(
    clippy::struct_excessive_bools,
    reason = "FormatConfig has standard CLI config bool fields"
)]

use rayon::prelude::*;
use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicUsize, Ordering};

use bridgefmt_rules::{format_source, FormatOptions};
use tracing::debug;

use super::{read_source, report};
use crate::config::{apply_args, resolve_options};
use crate::error::CliError;

/// Name of the per-directory ignore file.
const IGNORE_FILE: &str = ".bridgefmtignore";

/// Directory names skipped unless `--no-ignore` is given.
const DEFAULT_IGNORED_DIRS: [&str; 2] = ["Pods", "DerivedData"];

/// Configuration for the format command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Check if files are formatted without modifying them.
    /// Returns exit code 1 if any files would be modified.
    pub check: bool,
    /// Show diff output instead of modifying files.
    pub diff: bool,
    /// Read from stdin and write to stdout.
    pub stdin: bool,
    /// Ignore .bridgefmtignore files and the default ignores.
    pub no_ignore: bool,
    /// Rule option arguments from the command line, applied on top of
    /// each file's `.bridgefmt`.
    pub overrides: Vec<String>,
}

/// Result of formatting a single file.
#[derive(Debug)]
pub enum FormatResult {
    /// File was unchanged (already formatted).
    Unchanged,
    /// File was formatted successfully.
    Formatted,
    /// File would be formatted (in check or diff mode).
    WouldFormat,
    /// File could not be read, configured or written.
    Failed(CliError),
}

/// What the `fmt` arguments ask for.
#[derive(Debug, PartialEq, Eq)]
pub enum FmtArgs {
    Help,
    Run {
        config: FormatConfig,
        paths: Vec<String>,
    },
}

/// Parse the arguments following `fmt`.
pub fn parse_fmt_args(args: &[String]) -> Result<FmtArgs, CliError> {
    let mut config = FormatConfig::default();
    let mut paths: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--check" => config.check = true,
            "--diff" => config.diff = true,
            "--stdin" => config.stdin = true,
            "--no-ignore" => config.no_ignore = true,
            "--help" | "-h" => return Ok(FmtArgs::Help),
            _ if is_rule_option(arg) => {
                config.overrides.push(arg.to_string());
                if !arg.contains('=') {
                    if let Some(value @ ("true" | "false")) =
                        args.get(i + 1).map(String::as_str)
                    {
                        config.overrides.push(value.to_string());
                        i += 1;
                    }
                }
            }
            _ if arg.starts_with('-') => {
                return Err(CliError::Usage(format!(
                    "Unknown option: {arg}\nRun 'bridgefmt fmt --help' for usage"
                )));
            }
            _ => paths.push(arg.to_string()),
        }
        i += 1;
    }

    // Surface bad values before touching any file.
    apply_args(&mut FormatOptions::default(), &config.overrides)?;

    if config.stdin {
        let conflict = if !paths.is_empty() {
            Some("Cannot specify paths with --stdin")
        } else if config.check {
            Some("Cannot use --check with --stdin")
        } else if config.diff {
            Some("Cannot use --diff with --stdin")
        } else {
            None
        };
        if let Some(message) = conflict {
            return Err(CliError::Usage(message.to_string()));
        }
    }

    Ok(FmtArgs::Run { config, paths })
}

fn is_rule_option(arg: &str) -> bool {
    arg.strip_prefix("--").is_some_and(|body| {
        let key = body.split_once('=').map_or(body, |(key, _)| key);
        FormatOptions::is_option(key)
    })
}

/// Format a single Swift source file.
///
/// Returns the format result indicating whether the file was changed.
pub fn format_file(path: &Path, config: &FormatConfig) -> FormatResult {
    let outcome = read_source(path).and_then(|content| {
        let options = resolve_options(path, &config.overrides)?;
        format_content(path, &content, &options, config)
    });
    outcome.unwrap_or_else(FormatResult::Failed)
}

/// Format stdin and write the result to stdout.
///
/// Options come from the `.bridgefmt` governing the current directory.
fn format_stdin(config: &FormatConfig) -> Result<(), CliError> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(CliError::Stdin)?;

    let options = resolve_options(Path::new("."), &config.overrides)?;
    print!("{}", format_source(&content, &options));
    Ok(())
}

/// Format content and optionally write to file.
fn format_content(
    path: &Path,
    content: &str,
    options: &FormatOptions,
    config: &FormatConfig,
) -> Result<FormatResult, CliError> {
    let formatted = format_source(content, options);

    if formatted == content {
        return Ok(FormatResult::Unchanged);
    }
    debug!(path = %path.display(), "content changed");

    if config.check {
        return Ok(FormatResult::WouldFormat);
    }

    if config.diff {
        print!("{}", render_diff(&path.display().to_string(), content, &formatted));
        return Ok(FormatResult::WouldFormat);
    }

    std::fs::write(path, &formatted).map_err(|e| CliError::write(path, e))?;
    Ok(FormatResult::Formatted)
}

/// Render a unified-style diff between original and formatted content.
///
/// Rules only insert, so lines are paired by a forward walk: a formatted
/// line that is followed by the pending original line counts as an addition,
/// any other mismatch as a changed line.
pub fn render_diff(path: &str, original: &str, formatted: &str) -> String {
    let original_lines: Vec<&str> = original.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();

    let mut output = String::new();
    let _ = writeln!(output, "--- {path}");
    let _ = writeln!(output, "+++ {path}");

    let mut o = 0;
    let mut f = 0;
    // Original index where the two sides last came back in step.
    let mut synced = 0;
    while o < original_lines.len() || f < formatted_lines.len() {
        if original_lines.get(o) == formatted_lines.get(f) {
            o += 1;
            f += 1;
            continue;
        }

        // A changed region: consume lines until both sides line up again.
        let context = (o - synced).min(2);
        let hunk_o = o - context;
        let hunk_f = f - context;
        let mut removed = Vec::new();
        let mut added = Vec::new();
        while o < original_lines.len() || f < formatted_lines.len() {
            let orig = original_lines.get(o);
            let fmt = formatted_lines.get(f);
            if orig.is_some() && orig == fmt {
                break;
            }
            // An inserted line leaves the original line for the next step.
            let is_insertion = match (orig, fmt) {
                (Some(orig_line), Some(_)) => formatted_lines.get(f + 1) == Some(orig_line),
                (None, Some(_)) => true,
                _ => false,
            };
            if is_insertion {
                added.push(formatted_lines[f]);
                f += 1;
            } else {
                if let Some(orig_line) = orig {
                    removed.push(*orig_line);
                    o += 1;
                }
                if let Some(fmt_line) = fmt {
                    added.push(*fmt_line);
                    f += 1;
                }
            }
        }

        let _ = writeln!(
            output,
            "@@ -{},{} +{},{} @@",
            hunk_o + 1,
            context + removed.len(),
            hunk_f + 1,
            context + added.len()
        );
        for line in &original_lines[hunk_o..hunk_o + context] {
            let _ = writeln!(output, " {line}");
        }
        for line in removed {
            let _ = writeln!(output, "-{line}");
        }
        for line in added {
            let _ = writeln!(output, "+{line}");
        }
        synced = o;
    }
    output
}

/// Format all Swift files in a directory recursively.
///
/// Returns `(formatted, unchanged, errors)`.
pub fn format_directory(path: &Path, config: &FormatConfig) -> (usize, usize, usize) {
    let ignore_patterns = if config.no_ignore {
        Vec::new()
    } else {
        load_ignore_patterns(path)
    };

    // Collect all files first
    let mut files = Vec::new();
    visit_swift_files(path, path, config, &ignore_patterns, &mut |file_path| {
        files.push(file_path.to_path_buf());
    });
    debug!(dir = %path.display(), files = files.len(), "collected swift files");

    let formatted_count = AtomicUsize::new(0);
    let unchanged_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|file_path| {
        let result = format_file(file_path, config);
        let counter = match report_result(&file_path.display().to_string(), &result, config) {
            Tally::Formatted => &formatted_count,
            Tally::Unchanged => &unchanged_count,
            Tally::Error => &error_count,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    });

    (
        formatted_count.load(Ordering::Relaxed),
        unchanged_count.load(Ordering::Relaxed),
        error_count.load(Ordering::Relaxed),
    )
}

enum Tally {
    Formatted,
    Unchanged,
    Error,
}

/// Print the per-file line for `result`.
fn report_result(path: &str, result: &FormatResult, config: &FormatConfig) -> Tally {
    match result {
        FormatResult::Formatted => {
            if !config.check && !config.diff {
                println!("Formatted: {path}");
            }
            Tally::Formatted
        }
        FormatResult::WouldFormat => {
            if config.check {
                println!("Would format: {path}");
            }
            Tally::Formatted
        }
        FormatResult::Unchanged => Tally::Unchanged,
        FormatResult::Failed(err) => {
            eprintln!("error: {err}");
            Tally::Error
        }
    }
}

/// Load ignore patterns from the `.bridgefmtignore` file in `root`.
fn load_ignore_patterns(root: &Path) -> Vec<String> {
    match std::fs::read_to_string(root.join(IGNORE_FILE)) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Check if a path matches any of the ignore patterns.
///
/// Patterns are relative to `root`. `**` spans directories, `*` stays
/// within one path segment, anything else matches a path, a directory
/// prefix or a bare file name.
fn is_ignored(path: &Path, root: &Path, patterns: &[String]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    let relative = relative.to_string_lossy().replace('\\', "/");
    let file_name = path.file_name().and_then(|n| n.to_str());

    patterns.iter().any(|pattern| {
        if let Some((prefix, suffix)) = pattern.split_once("**") {
            let prefix = prefix.trim_end_matches('/');
            let suffix = suffix.trim_start_matches('/');
            (prefix.is_empty() || relative.starts_with(prefix))
                && (suffix.is_empty() || relative.ends_with(suffix))
        } else if let Some((prefix, suffix)) = pattern.split_once('*') {
            relative.len() >= prefix.len() + suffix.len()
                && relative.starts_with(prefix)
                && relative.ends_with(suffix)
                && !relative[prefix.len()..relative.len() - suffix.len()].contains('/')
        } else {
            relative == *pattern
                || relative.starts_with(&format!("{pattern}/"))
                || file_name == Some(pattern.as_str())
        }
    })
}

/// Visit all .swift files under `dir`, relative to `root` for ignore matching.
fn visit_swift_files<F: FnMut(&Path)>(
    dir: &Path,
    root: &Path,
    config: &FormatConfig,
    ignore_patterns: &[String],
    callback: &mut F,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory '{}': {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden entries and build output (unless --no-ignore)
        if !config.no_ignore {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') || DEFAULT_IGNORED_DIRS.contains(&name) {
                    continue;
                }
            }
            if is_ignored(&path, root, ignore_patterns) {
                continue;
            }
        }

        if path.is_dir() {
            visit_swift_files(&path, root, config, ignore_patterns, callback);
        } else if path.extension().is_some_and(|ext| ext == "swift") {
            callback(&path);
        }
    }
}

/// Run the format command.
pub fn run_format(args: &[String]) -> ExitCode {
    let (config, mut paths) = match parse_fmt_args(args) {
        Ok(FmtArgs::Run { config, paths }) => (config, paths),
        Ok(FmtArgs::Help) => {
            print_fmt_help();
            return ExitCode::SUCCESS;
        }
        Err(err) => return report(&err),
    };

    if config.stdin {
        return match format_stdin(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => report(&err),
        };
    }

    // Default to current directory if no paths specified
    if paths.is_empty() {
        paths.push(".".to_string());
    }

    let mut total_formatted = 0;
    let mut total_unchanged = 0;
    let mut total_errors = 0;

    for path in &paths {
        let path_obj = PathBuf::from(path);

        if path_obj.is_file() {
            match report_result(path, &format_file(&path_obj, &config), &config) {
                Tally::Formatted => total_formatted += 1,
                Tally::Unchanged => total_unchanged += 1,
                Tally::Error => total_errors += 1,
            }
        } else if path_obj.is_dir() {
            let (formatted, unchanged, errors) = format_directory(&path_obj, &config);
            total_formatted += formatted;
            total_unchanged += unchanged;
            total_errors += errors;
        } else {
            eprintln!("Path not found: {path}");
            total_errors += 1;
        }
    }

    // Print summary for directory operations
    if paths.len() > 1 || paths.iter().any(|p| Path::new(p).is_dir()) {
        let verb = if config.check {
            "would format"
        } else {
            "formatted"
        };
        if total_formatted > 0 || total_unchanged > 0 {
            println!("\n{total_formatted} {verb}, {total_unchanged} unchanged");
        }
    }

    if (config.check && total_formatted > 0) || total_errors > 0 {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_fmt_help() {
    println!("Rewrite Swift source files");
    println!();
    println!("Usage: bridgefmt fmt [options] [paths...]");
    println!();
    println!("Arguments:");
    println!("  paths                       Files or directories to format (default: .)");
    println!();
    println!("Options:");
    println!("  --check                     Check if files are formatted (exit 1 if not)");
    println!("  --diff                      Show diff output instead of modifying files");
    println!("  --stdin                     Read from stdin, write to stdout");
    println!("  --no-ignore                 Ignore .bridgefmtignore files and format everything");
    println!("  --add-dynamic [true|false]  Add dynamic and @objcMembers for Objective-C bridging");
    println!("  --help                      Show this help message");
    println!();
    println!("Config files:");
    println!("  A .bridgefmt file holds rule options, e.g. `--add-dynamic true`.");
    println!("  The nearest one above each file applies; command-line options win.");
    println!();
    println!("Ignore files:");
    println!("  Create a .bridgefmtignore file to exclude paths from formatting.");
    println!("  Patterns support * (single directory) and ** (any directories).");
    println!("  Default ignores: hidden files (.*), Pods/, DerivedData/");
    println!();
    println!("Examples:");
    println!("  bridgefmt fmt --add-dynamic              # Format all files in current directory");
    println!("  bridgefmt fmt Sources/ --add-dynamic     # Format all files in Sources/");
    println!("  bridgefmt fmt --check                    # Check formatting in CI");
    println!("  bridgefmt fmt --diff App.swift           # Preview changes");
    println!("  cat App.swift | bridgefmt fmt --stdin    # Format stdin to stdout");
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
mod tests;
