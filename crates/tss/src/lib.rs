//! # TSS - Terminal Stylesheet Parser
//!
//! A parser for a CSS-like dialect used to style terminal user-interface
//! widgets. Authors write declarations (`color: red;`), selectors (`#id`,
//! `.class`), variables (`$x: 10;`), and shorthand properties (margin,
//! offset, transition); this crate turns that text into a validated style
//! model a widget/layout/rendering subsystem can query.
//!
//! ## Quick Start
//!
//! ```rust
//! use tss::Stylesheet;
//!
//! let source = r#"
//!     $accent: red;
//!
//!     #sidebar {
//!         color: $accent;
//!         margin: 1 2;
//!         opacity: 75%;
//!     }
//! "#;
//!
//! let mut stylesheet = Stylesheet::new();
//! stylesheet.parse(source, "app.tss").expect("valid TSS");
//!
//! let styles = &stylesheet.rules[0].styles;
//! assert_eq!(styles.opacity, 0.75);
//! ```
//!
//! ## Pipeline
//!
//! Parsing runs in three stages, each a lazy pass over the previous one:
//!
//! 1. **Tokenize**: source text becomes a stream of location-stamped
//!    [`Token`](parser::Token)s
//! 2. **Substitute**: `$name` references are expanded from the variable
//!    table, with full provenance for diagnostics
//! 3. **Parse**: declarations are validated into [`Rule`](parser::Rule)s;
//!    invalid declarations are collected per rule rather than aborting,
//!    and surfaced once as an aggregate error
//!
//! ## Supported Properties
//!
//! - Colors: `color`, `background`
//! - Position: `offset`, `offset-x`, `offset-y`
//! - Box model: `margin`, `padding` (with per-side variants)
//! - Layout: `layout` (validated against a layout registry)
//! - Animation: `transition`, `opacity`
//!
//! ## Modules
//!
//! - [`parser`]: tokenizing, variable substitution, and rule parsing
//! - [`types`]: colors, scalars, spacing, layouts, transitions
//! - [`styles`]: the validated per-rule style record
//! - [`error`]: the three-tier error taxonomy

pub mod error;
pub mod parser;
pub mod styles;
pub mod types;

pub use error::TssError;
pub use parser::{Rule, Stylesheet};
pub use styles::Styles;
