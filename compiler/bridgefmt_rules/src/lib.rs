//! Token rewriting rules for Swift sources.
//!
//! # Architecture
//!
//! Rules operate on a lossless [`TokenList`](bridgefmt_token::TokenList):
//!
//! 1. **Plan**: a single forward scan decides every edit against the
//!    unmodified buffer ([`EditPlan`])
//! 2. **Apply**: the plan is applied from the highest index down, so
//!    planned anchors never shift
//!
//! Rules never fail. A candidate that cannot be placed is skipped.
//!
//! # Modules
//!
//! - [`add_dynamic`]: the `addDynamic` rule and its scope tracking
//! - [`edit`]: edit plans and the token mutator
//! - [`options`]: `FormatOptions` and option parsing
//! - [`rule`]: the `FormatRule` trait, registry and pipeline

pub mod add_dynamic;
pub mod edit;
pub mod options;
pub mod rule;

pub use add_dynamic::AddDynamic;
pub use edit::{Edit, EditPlan};
pub use options::{FormatOptions, OptionsError};
pub use rule::{all_rules, format_source, format_tokens, FormatRule};
