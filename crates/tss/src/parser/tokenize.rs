//! Position-tracking tokenizer for TSS source text.
//!
//! Converts raw stylesheet text into a stream of [`Token`]s, each carrying
//! its exact source slice and `(row, column)` location (zero-indexed,
//! columns counting characters). The tokenizer is a small state machine:
//!
//! - **Root**: between rules — selector starts, variable definitions
//! - **Block**: inside `{ ... }` — declaration names, values, terminators
//! - **VariableValue**: after `$name:` — value tokens until `;`, newline,
//!   or end of source
//!
//! Variable *references* (`$name` inside declaration values) are left
//! unresolved here; they come out as plain [`TokenKind::Token`]s and are
//! expanded by [`substitute_references`](crate::parser::substitute_references).

use std::sync::Arc;

use crate::error::TokenizeError;

/// A `(row, column)` position in the source, zero-indexed.
pub type Location = (usize, usize);

/// Classification of a lexical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of whitespace, collapsed into a single token.
    Whitespace,
    /// Numeric literal, including any unit suffix (`5`, `-5.5%`, `1200ms`).
    Number,
    /// Catch-all bare token: keywords, color literals, `$name` references.
    Token,
    /// A variable definition start: `$name:`.
    VariableName,
    /// Terminator of a variable value: `;` or newline.
    VariableValueEnd,
    /// `#name` opening an id selector.
    SelectorStartId,
    /// `.name` opening a class selector.
    SelectorStartClass,
    /// A bare word opening a type selector.
    SelectorStartType,
    /// `*` opening a universal selector.
    SelectorStartUniversal,
    /// `{`
    DeclarationSetStart,
    /// `}`
    DeclarationSetEnd,
    /// `name:` inside a declaration set.
    DeclarationName,
    /// `;` inside a declaration set.
    DeclarationEnd,
}

/// Provenance stamped onto a token produced by variable substitution.
///
/// Records which `$name` usage triggered the copy, where that usage sits
/// in the source, and how many characters it spans (sigil included) so
/// diagnostics can underline the usage rather than the definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferencedBy {
    /// Variable name, without the `$` sigil.
    pub name: String,
    /// Location of the `$name` usage that triggered the expansion.
    pub location: Location,
    /// Character length of the usage text, including the sigil.
    pub length: usize,
}

/// The smallest lexical unit: kind, exact source text, and provenance.
///
/// A token's `location` always refers to its original definition site,
/// even when the token is a copy produced by variable substitution; the
/// copy is distinguished by its [`referenced_by`](Token::referenced_by)
/// field instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source slice, including trailing punctuation such as `:` or `;`.
    pub value: String,
    /// Source path or identifier, used only for diagnostics.
    pub path: Arc<str>,
    /// The entire source text, shared for error context rendering.
    pub code: Arc<str>,
    pub location: Location,
    /// Set iff this token is a substitution copy.
    pub referenced_by: Option<ReferencedBy>,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        value: impl Into<String>,
        path: impl Into<Arc<str>>,
        code: impl Into<Arc<str>>,
        location: Location,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            path: path.into(),
            code: code.into(),
            location,
            referenced_by: None,
        }
    }

    /// Returns a copy of this token stamped with substitution provenance.
    ///
    /// The copy keeps the original `location`; any previous provenance is
    /// replaced, so the stamp always names the outermost reference.
    pub fn with_reference(&self, referenced_by: ReferencedBy) -> Self {
        Self {
            referenced_by: Some(referenced_by),
            ..self.clone()
        }
    }
}

/// Unit suffixes recognized after a numeric literal, longest first.
const NUMBER_SUFFIXES: &[&str] = &["ms", "vw", "vh", "fr", "s", "w", "h", "%"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expect {
    Root,
    Block,
    VariableValue,
}

/// Tokenizes `code`, yielding tokens lazily in a single pass.
///
/// `path` identifies the source in diagnostics only; it may be empty.
pub fn tokenize(code: &str, path: &str) -> Tokenizer {
    Tokenizer::new(code, path)
}

/// Lazy, single-pass tokenizer over TSS source text.
///
/// Yields `Result<Token, TokenizeError>`; the first error is fatal and
/// the iterator fuses afterwards.
pub struct Tokenizer {
    code: Arc<str>,
    path: Arc<str>,
    chars: Vec<char>,
    pos: usize,
    row: usize,
    col: usize,
    state: Expect,
    done: bool,
}

impl Tokenizer {
    pub fn new(code: &str, path: &str) -> Self {
        Self {
            code: Arc::from(code),
            path: Arc::from(path),
            chars: code.chars().collect(),
            pos: 0,
            row: 0,
            col: 0,
            state: Expect::Root,
            done: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn location(&self) -> Location {
        (self.row, self.col)
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }

    fn token(&self, kind: TokenKind, value: impl Into<String>, location: Location) -> Token {
        Token::new(
            kind,
            value,
            Arc::clone(&self.path),
            Arc::clone(&self.code),
            location,
        )
    }

    fn error(&self, message: impl Into<String>) -> TokenizeError {
        TokenizeError {
            message: message.into(),
            path: self.path.to_string(),
            location: self.location(),
            line: self.code.lines().nth(self.row).unwrap_or("").to_string(),
        }
    }

    /// Skips a `/* ... */` comment; an unterminated comment runs to EOF.
    fn skip_comment(&mut self) {
        self.advance();
        self.advance();
        while let Some(ch) = self.advance() {
            if ch == '*' && self.peek() == Some('/') {
                self.advance();
                break;
            }
        }
    }

    fn is_ident_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '-' || ch == '_'
    }

    /// Reads `$name`, returning the name without the sigil.
    fn variable_ident(&mut self) -> Result<String, TokenizeError> {
        self.advance();
        let name = self.take_while(Self::is_ident_char);
        if name.is_empty() {
            Err(self.error("expected a variable name after '$'"))
        } else {
            Ok(name)
        }
    }

    /// Numeric literal: optional `-`, digits, optional `.digits`, optional
    /// unit suffix when not glued to a word.
    fn number_token(&mut self, location: Location) -> Token {
        let mut text = String::new();
        if self.peek() == Some('-') {
            text.push('-');
            self.advance();
        }
        text.push_str(&self.take_while(|ch| ch.is_ascii_digit()));
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|ch| ch.is_ascii_digit()) {
            text.push('.');
            self.advance();
            text.push_str(&self.take_while(|ch| ch.is_ascii_digit()));
        }
        if let Some(suffix) = self.number_suffix() {
            text.push_str(suffix);
            for _ in 0..suffix.len() {
                self.advance();
            }
        }
        self.token(TokenKind::Number, text, location)
    }

    /// Matches a unit suffix at the current position, rejecting matches
    /// glued to a following word character (`123x` stays two tokens).
    fn number_suffix(&self) -> Option<&'static str> {
        NUMBER_SUFFIXES.iter().copied().find(|suffix| {
            let matches = suffix
                .chars()
                .enumerate()
                .all(|(i, ch)| self.peek_at(i) == Some(ch));
            matches
                && !self
                    .peek_at(suffix.len())
                    .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
        })
    }

    fn starts_number(&self) -> bool {
        match self.peek() {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('-') => self.peek_at(1).is_some_and(|ch| ch.is_ascii_digit()),
            _ => false,
        }
    }

    fn root_token(&mut self) -> Result<Token, TokenizeError> {
        let location = self.location();
        let ch = self.peek().expect("root_token called at end of input");
        match ch {
            ch if ch.is_whitespace() => {
                let run = self.take_while(char::is_whitespace);
                Ok(self.token(TokenKind::Whitespace, run, location))
            }
            '$' => {
                let name = self.variable_ident()?;
                if self.peek() == Some(':') {
                    self.advance();
                    self.state = Expect::VariableValue;
                    Ok(self.token(TokenKind::VariableName, format!("${name}:"), location))
                } else {
                    Err(self.error(format!(
                        "variable ${name} is missing ':' (references are only valid inside declaration values)"
                    )))
                }
            }
            '#' => {
                self.advance();
                let name = self.take_while(Self::is_ident_char);
                if name.is_empty() {
                    return Err(self.error("expected an identifier after '#'"));
                }
                Ok(self.token(TokenKind::SelectorStartId, format!("#{name}"), location))
            }
            '.' => {
                self.advance();
                let name = self.take_while(Self::is_ident_char);
                if name.is_empty() {
                    return Err(self.error("expected an identifier after '.'"));
                }
                Ok(self.token(TokenKind::SelectorStartClass, format!(".{name}"), location))
            }
            '*' => {
                self.advance();
                Ok(self.token(TokenKind::SelectorStartUniversal, "*", location))
            }
            '{' => {
                self.advance();
                self.state = Expect::Block;
                Ok(self.token(TokenKind::DeclarationSetStart, "{", location))
            }
            ch if ch.is_alphabetic() || ch == '_' => {
                let word = self.take_while(Self::is_ident_char);
                Ok(self.token(TokenKind::SelectorStartType, word, location))
            }
            _ => Err(self.error(format!("unexpected character {ch:?}"))),
        }
    }

    fn block_token(&mut self) -> Result<Token, TokenizeError> {
        let location = self.location();
        let ch = self.peek().expect("block_token called at end of input");
        match ch {
            ch if ch.is_whitespace() => {
                let run = self.take_while(char::is_whitespace);
                Ok(self.token(TokenKind::Whitespace, run, location))
            }
            ';' => {
                self.advance();
                Ok(self.token(TokenKind::DeclarationEnd, ";", location))
            }
            '}' => {
                self.advance();
                self.state = Expect::Root;
                Ok(self.token(TokenKind::DeclarationSetEnd, "}", location))
            }
            '{' => Err(self.error("nested declaration sets are not supported")),
            '$' => {
                let name = self.variable_ident()?;
                Ok(self.token(TokenKind::Token, format!("${name}"), location))
            }
            _ if self.starts_number() => Ok(self.number_token(location)),
            ch if ch.is_alphabetic() || ch == '_' => {
                let word = self.take_while(Self::is_ident_char);
                if self.peek() == Some(':') {
                    self.advance();
                    Ok(self.token(TokenKind::DeclarationName, format!("{word}:"), location))
                } else {
                    Ok(self.token(TokenKind::Token, word, location))
                }
            }
            ',' => {
                self.advance();
                Ok(self.token(TokenKind::Token, ",", location))
            }
            _ => {
                let run = self.take_while(|ch| {
                    !ch.is_whitespace() && !matches!(ch, ';' | '{' | '}' | ',')
                });
                Ok(self.token(TokenKind::Token, run, location))
            }
        }
    }

    fn value_token(&mut self) -> Result<Token, TokenizeError> {
        let location = self.location();
        let ch = self.peek().expect("value_token called at end of input");
        match ch {
            '\n' => {
                self.advance();
                self.state = Expect::Root;
                Ok(self.token(TokenKind::VariableValueEnd, "\n", location))
            }
            ';' => {
                self.advance();
                self.state = Expect::Root;
                Ok(self.token(TokenKind::VariableValueEnd, ";", location))
            }
            ' ' | '\t' | '\r' => {
                let run = self.take_while(|ch| matches!(ch, ' ' | '\t' | '\r'));
                Ok(self.token(TokenKind::Whitespace, run, location))
            }
            '$' => {
                let name = self.variable_ident()?;
                Ok(self.token(TokenKind::Token, format!("${name}"), location))
            }
            _ if self.starts_number() => Ok(self.number_token(location)),
            ',' => {
                self.advance();
                Ok(self.token(TokenKind::Token, ",", location))
            }
            _ => {
                let run = self.take_while(|ch| {
                    !ch.is_whitespace() && !matches!(ch, ';' | ',')
                });
                Ok(self.token(TokenKind::Token, run, location))
            }
        }
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if self.pos >= self.chars.len() {
                self.done = true;
                return None;
            }
            if self.peek() == Some('/') && self.peek_at(1) == Some('*') {
                self.skip_comment();
                continue;
            }
            let result = match self.state {
                Expect::Root => self.root_token(),
                Expect::Block => self.block_token(),
                Expect::VariableValue => self.value_token(),
            };
            if result.is_err() {
                self.done = true;
            }
            return Some(result);
        }
    }
}
