//! Macro-style variable substitution over the token stream.
//!
//! [`substitute_references`] wraps a token stream in a lazy adapter that:
//!
//! - collects `$name:` definitions into a variable table (definition order,
//!   redefinition overwrites),
//! - passes definition tokens through to the output verbatim, and
//! - replaces `$name` usages with copies of the stored value tokens, each
//!   copy keeping its original definition-site location but stamped with a
//!   fresh [`ReferencedBy`] pointing at the usage.
//!
//! References found while a definition's value is being collected are
//! expanded immediately against the table built so far, so stored values
//! never contain unresolved references: by the time `$y: $x` is recorded,
//! `$x`'s tokens are already inlined into `$y`'s stored run.

use std::collections::{HashMap, VecDeque};

use crate::error::{SubstituteError, TokenizeError, UnresolvedVariableError};
use crate::parser::tokenize::{ReferencedBy, Token, TokenKind};

/// Expands variable references in `tokens`, lazily and in a single pass.
///
/// Yields `Result<Token, SubstituteError>`; an undefined `$name` usage or
/// an upstream tokenize error is fatal and fuses the iterator.
pub fn substitute_references<I>(tokens: I) -> Substituter<I>
where
    I: Iterator<Item = Result<Token, TokenizeError>>,
{
    Substituter {
        input: tokens,
        table: HashMap::new(),
        collecting: None,
        queue: VecDeque::new(),
        done: false,
    }
}

/// Iterator adapter produced by [`substitute_references`].
pub struct Substituter<I> {
    input: I,
    /// Variable name to stored value run; values are already fully expanded.
    table: HashMap<String, Vec<Token>>,
    /// Name and value run of the definition currently being collected.
    collecting: Option<(String, Vec<Token>)>,
    /// Tokens ready to be emitted (an expansion yields several at once).
    queue: VecDeque<Token>,
    done: bool,
}

impl<I> Substituter<I> {
    /// Looks up a `$name` usage token and returns provenance-stamped copies
    /// of the stored value run.
    fn expand(&self, token: &Token) -> Result<Vec<Token>, UnresolvedVariableError> {
        let name = token.value.trim_start_matches('$');
        let Some(value) = self.table.get(name) else {
            return Err(UnresolvedVariableError {
                name: name.to_string(),
                location: token.location,
                path: token.path.to_string(),
            });
        };
        let referenced_by = ReferencedBy {
            name: name.to_string(),
            location: token.location,
            length: token.value.chars().count(),
        };
        Ok(value
            .iter()
            .map(|stored| stored.with_reference(referenced_by.clone()))
            .collect())
    }

    /// Stores a completed definition, trimming exactly one leading and one
    /// trailing whitespace token from the value run.
    fn store(&mut self, name: String, mut value: Vec<Token>) {
        if value
            .first()
            .is_some_and(|token| token.kind == TokenKind::Whitespace)
        {
            value.remove(0);
        }
        if value
            .last()
            .is_some_and(|token| token.kind == TokenKind::Whitespace)
        {
            value.pop();
        }
        self.table.insert(name, value);
    }

    fn is_reference(token: &Token) -> bool {
        token.kind == TokenKind::Token && token.value.starts_with('$')
    }

    /// Handles one input token while a definition value is being collected.
    fn feed_collecting(&mut self, token: Token) -> Result<(), UnresolvedVariableError> {
        if token.kind == TokenKind::VariableValueEnd {
            let (name, value) = self.collecting.take().expect("collection in progress");
            self.store(name, value);
            self.queue.push_back(token);
        } else if Self::is_reference(&token) {
            let copies = self.expand(&token)?;
            if let Some((_, value)) = self.collecting.as_mut() {
                value.extend(copies.iter().cloned());
            }
            self.queue.extend(copies);
        } else {
            if let Some((_, value)) = self.collecting.as_mut() {
                value.push(token.clone());
            }
            self.queue.push_back(token);
        }
        Ok(())
    }

    /// Handles one input token outside value collection.
    fn feed(&mut self, token: Token) -> Result<(), UnresolvedVariableError> {
        match token.kind {
            TokenKind::VariableName => {
                let name = token
                    .value
                    .trim_start_matches('$')
                    .trim_end_matches(':')
                    .to_string();
                self.collecting = Some((name, Vec::new()));
                self.queue.push_back(token);
            }
            _ if Self::is_reference(&token) => {
                let copies = self.expand(&token)?;
                self.queue.extend(copies);
            }
            _ => self.queue.push_back(token),
        }
        Ok(())
    }
}

impl<I> Iterator for Substituter<I>
where
    I: Iterator<Item = Result<Token, TokenizeError>>,
{
    type Item = Result<Token, SubstituteError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            match self.input.next() {
                None => {
                    self.done = true;
                    // A definition left unterminated at EOF is still captured.
                    if let Some((name, value)) = self.collecting.take() {
                        self.store(name, value);
                    }
                }
                Some(Err(error)) => {
                    self.done = true;
                    return Some(Err(error.into()));
                }
                Some(Ok(token)) => {
                    let result = if self.collecting.is_some() {
                        self.feed_collecting(token)
                    } else {
                        self.feed(token)
                    };
                    if let Err(error) = result {
                        self.done = true;
                        return Some(Err(error.into()));
                    }
                }
            }
        }
    }
}
