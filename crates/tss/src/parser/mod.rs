//! TSS parsing pipeline.
//!
//! The front end runs in three lazy stages, leaves first:
//!
//! 1. [`tokenize`]: source text to a position-tracked token stream
//! 2. [`substitute_references`]: variable definitions collected and usages
//!    expanded in place, with provenance
//! 3. [`Stylesheet::parse`]: the substituted stream validated into
//!    [`Rule`]s with per-declaration error collection
//!
//! ## Submodules
//!
//! - [`tokenize`]: tokens, locations, and the tokenizer state machine
//! - [`substitute`]: the variable table and macro-style expansion
//! - [`stylesheet`]: rule parsing and the `Stylesheet` entry point
//! - [`properties`]: per-property validators and dispatch
//! - [`units`]: numeric value and unit parsing

pub mod properties;
pub mod stylesheet;
pub mod substitute;
pub mod tokenize;
pub mod units;

pub use stylesheet::{Rule, Selector, SelectorKind, Stylesheet};
pub use substitute::{Substituter, substitute_references};
pub use tokenize::{Location, ReferencedBy, Token, TokenKind, Tokenizer, tokenize};
