//! bridgefmt CLI
//!
//! Rewrites Swift sources for Objective-C bridging.

use std::process::ExitCode;

use bridgefmt::commands::{lex_file, list_rules, run_format};
use bridgefmt::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];

    match command.as_str() {
        "fmt" => run_format(&args[2..]),
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: bridgefmt lex <file.swift>");
                return ExitCode::FAILURE;
            }
            lex_file(&args[2])
        }
        "rules" => {
            list_rules();
            ExitCode::SUCCESS
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("bridgefmt {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("bridgefmt - Swift rewriting for Objective-C bridging");
    println!();
    println!("Usage: bridgefmt <command> [options]");
    println!();
    println!("Commands:");
    println!("  fmt [paths...]       Rewrite Swift source files");
    println!("  lex <file.swift>     Tokenize and display tokens");
    println!("  rules                List available rules and their options");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Format options:");
    println!("  --check                     Check if files are formatted (exit 1 if not)");
    println!("  --diff                      Show diff output instead of modifying files");
    println!("  --stdin                     Read from stdin, write to stdout");
    println!("  --add-dynamic [true|false]  Add dynamic and @objcMembers to class members");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing output on stderr (e.g. RUST_LOG=debug)");
    println!();
    println!("Examples:");
    println!("  bridgefmt fmt --add-dynamic              # Rewrite all files in current directory");
    println!("  bridgefmt fmt --check --add-dynamic      # Check in CI");
    println!("  bridgefmt lex App.swift                  # Inspect the token stream");
}
