//! bridgefmt - Swift source rewriting for Objective-C bridging
//!
//! Library half of the `bridgefmt` binary. The rewriting itself lives in
//! `bridgefmt_rules`; this crate resolves options, walks the file system
//! and reports results.
//!
//! # Architecture
//!
//! ```text
//! paths / stdin
//!     │
//!     ▼
//! config::resolve_options() ──► FormatOptions  (.bridgefmt + CLI overrides)
//!     │
//!     ▼
//! bridgefmt_lexer::lex() ──► TokenList
//!     │
//!     ▼
//! bridgefmt_rules::format_tokens() ──► TokenList::to_source()
//! ```

pub mod commands;
pub mod config;
pub mod error;

pub use config::{apply_args, find_config, load_config, resolve_options, CONFIG_FILE};
pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Output goes to stderr so formatted source
/// on stdout stays clean.
/// Enable with `RUST_LOG=bridgefmt_rules=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
