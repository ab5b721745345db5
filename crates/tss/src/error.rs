//! Error types for TSS tokenizing, substitution, and parsing.
//!
//! The error model has three tiers:
//!
//! 1. **Fatal**: [`TokenizeError`] and [`UnresolvedVariableError`] abort a
//!    parse immediately with no partial result.
//! 2. **Recoverable**: [`ValidationError`] is recorded per rule and never
//!    stops sibling declarations or rules from being parsed.
//! 3. **Aggregate**: [`StylesheetParseError`] is raised once, after a full
//!    pass, bundling every recoverable error found.

use thiserror::Error;

use crate::parser::tokenize::{Location, Token};

/// Fatal error raised when no lexical rule matches the current position.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{path}:{}:{}: {message} near {line:?}", .location.0 + 1, .location.1 + 1)]
pub struct TokenizeError {
    pub message: String,
    /// Source path or identifier supplied to the tokenizer.
    pub path: String,
    /// Zero-indexed `(row, column)` of the offending character.
    pub location: Location,
    /// The full source line containing the error, for context rendering.
    pub line: String,
}

/// Fatal error raised when a `$name` usage has no prior definition.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{path}:{}:{}: reference to undefined variable ${name}", .location.0 + 1, .location.1 + 1)]
pub struct UnresolvedVariableError {
    /// Variable name, without the `$` sigil.
    pub name: String,
    /// Zero-indexed `(row, column)` of the `$name` usage.
    pub location: Location,
    pub path: String,
}

/// A recoverable per-declaration error, recorded into the owning rule.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// The offending token.
    pub token: Token,
    pub message: String,
}

impl ValidationError {
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        Self {
            token: token.clone(),
            message: message.into(),
        }
    }
}

/// Aggregate error raised once after a full parse pass, carrying every
/// rule-level `(token, message)` pair so callers can report all problems
/// at once.
///
/// The stylesheet's rules are still populated when this is returned;
/// best-effort callers may ignore it and read the parsed rules anyway.
#[derive(Error, Debug, Clone)]
#[error("stylesheet failed to parse with {} declaration error(s)", errors.len())]
pub struct StylesheetParseError {
    pub errors: Vec<(Token, String)>,
}

/// Error yielded by the variable-substitution stage.
#[derive(Error, Debug, Clone)]
pub enum SubstituteError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    UnresolvedVariable(#[from] UnresolvedVariableError),
}

/// Top-level error for the whole parsing pipeline.
#[derive(Error, Debug, Clone)]
pub enum TssError {
    /// Malformed lexical input; fatal, aborts immediately.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    /// Usage of an undefined `$name`; fatal, aborts immediately.
    #[error(transparent)]
    UnresolvedVariable(#[from] UnresolvedVariableError),
    /// Aggregate of all recoverable rule errors, raised after a full pass.
    #[error(transparent)]
    Parse(#[from] StylesheetParseError),
}

impl From<SubstituteError> for TssError {
    fn from(error: SubstituteError) -> Self {
        match error {
            SubstituteError::Tokenize(error) => Self::Tokenize(error),
            SubstituteError::UnresolvedVariable(error) => Self::UnresolvedVariable(error),
        }
    }
}
