//! Rule parsing and the `Stylesheet` entry point.
//!
//! Consumes the substituted token stream into [`Rule`]s. Error policy is
//! resilient rather than fail-fast: an invalid declaration is recorded
//! into its rule's error list and parsing continues with the next
//! declaration, so a single malformed line never discards a stylesheet.

use log::debug;

use crate::error::{StylesheetParseError, TssError};
use crate::parser::properties;
use crate::parser::substitute::substitute_references;
use crate::parser::tokenize::{Location, Token, TokenKind, tokenize};
use crate::styles::Styles;
use crate::types::{EasingRegistry, LayoutRegistry};

/// The selector kind opening a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Id,
    Class,
    Type,
    Universal,
}

/// Opaque selector descriptor, matched against widgets externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub kind: SelectorKind,
    /// Selector name without the `#`/`.` sigil; empty for `*`.
    pub name: String,
}

impl Selector {
    fn from_token(token: &Token) -> Self {
        match token.kind {
            TokenKind::SelectorStartId => Self {
                kind: SelectorKind::Id,
                name: token.value.trim_start_matches('#').to_string(),
            },
            TokenKind::SelectorStartClass => Self {
                kind: SelectorKind::Class,
                name: token.value.trim_start_matches('.').to_string(),
            },
            TokenKind::SelectorStartUniversal => Self {
                kind: SelectorKind::Universal,
                name: String::new(),
            },
            _ => Self {
                kind: SelectorKind::Type,
                name: token.value.clone(),
            },
        }
    }
}

/// One selector context with its validated styles and collected errors.
#[derive(Debug, Clone)]
pub struct Rule {
    pub selector: Selector,
    pub styles: Styles,
    /// Per-declaration errors, in declaration order.
    pub errors: Vec<(Token, String)>,
    /// Location of the selector that opened this rule.
    pub source_location: Location,
}

/// Parses TSS source into rules, aggregating all declaration errors.
///
/// # Examples
///
/// ```
/// use tss::Stylesheet;
///
/// let mut stylesheet = Stylesheet::new();
/// stylesheet
///     .parse("#sidebar { color: red; margin: 1 2; }", "app.tss")
///     .unwrap();
/// assert_eq!(stylesheet.rules.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    /// Parsed rules; populated even when `parse` returns the aggregate
    /// error, so best-effort callers can still inspect them.
    pub rules: Vec<Rule>,
    layouts: LayoutRegistry,
    easings: EasingRegistry,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stylesheet validating against caller-supplied registries.
    pub fn with_registries(layouts: LayoutRegistry, easings: EasingRegistry) -> Self {
        Self {
            rules: Vec::new(),
            layouts,
            easings,
        }
    }

    /// Tokenizes, substitutes variables, and parses `source` into rules.
    ///
    /// A previous parse's rules are discarded first. Tokenize and
    /// unresolved-variable errors abort immediately with no rules; any
    /// declaration errors are collected across the whole pass and returned
    /// once as [`StylesheetParseError`], with `self.rules` still holding
    /// everything that parsed.
    pub fn parse(&mut self, source: &str, path: &str) -> Result<(), TssError> {
        self.rules.clear();
        let mut tokens = Vec::new();
        for token in substitute_references(tokenize(source, path)) {
            tokens.push(token.map_err(TssError::from)?);
        }
        self.rules = parse_rules(&tokens, &self.layouts, &self.easings);
        let errors: Vec<(Token, String)> = self
            .rules
            .iter()
            .flat_map(|rule| rule.errors.iter().cloned())
            .collect();
        debug!(
            "parsed {} rule(s) from {path:?} with {} error(s)",
            self.rules.len(),
            errors.len()
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(StylesheetParseError { errors }.into())
        }
    }
}

/// Walks the substituted token stream, producing one rule per selector.
fn parse_rules(tokens: &[Token], layouts: &LayoutRegistry, easings: &EasingRegistry) -> Vec<Rule> {
    let mut rules = Vec::new();
    let mut index = 0;
    while index < tokens.len() {
        match tokens[index].kind {
            // Definitions already served their purpose during substitution.
            TokenKind::VariableName => {
                index += 1;
                while index < tokens.len() && tokens[index].kind != TokenKind::VariableValueEnd {
                    index += 1;
                }
                index += 1;
            }
            TokenKind::SelectorStartId
            | TokenKind::SelectorStartClass
            | TokenKind::SelectorStartType
            | TokenKind::SelectorStartUniversal => {
                let (rule, next) = parse_rule(tokens, index, layouts, easings);
                rules.push(rule);
                index = next;
            }
            _ => index += 1,
        }
    }
    rules
}

/// Parses one rule starting at the selector token at `start`; returns the
/// rule and the index just past its closing brace.
fn parse_rule(
    tokens: &[Token],
    start: usize,
    layouts: &LayoutRegistry,
    easings: &EasingRegistry,
) -> (Rule, usize) {
    let selector_token = &tokens[start];
    let mut rule = Rule {
        selector: Selector::from_token(selector_token),
        styles: Styles::default(),
        errors: Vec::new(),
        source_location: selector_token.location,
    };

    let mut index = start + 1;
    while index < tokens.len() && tokens[index].kind != TokenKind::DeclarationSetStart {
        index += 1;
    }
    index += 1;

    while index < tokens.len() {
        match tokens[index].kind {
            TokenKind::DeclarationSetEnd => {
                index += 1;
                break;
            }
            TokenKind::DeclarationName => {
                let name_token = &tokens[index];
                let name = name_token.value.trim_end_matches(':').to_string();
                index += 1;
                let value_start = index;
                while index < tokens.len()
                    && !matches!(
                        tokens[index].kind,
                        TokenKind::DeclarationEnd | TokenKind::DeclarationSetEnd
                    )
                {
                    index += 1;
                }
                let value: Vec<&Token> = tokens[value_start..index]
                    .iter()
                    .filter(|token| token.kind != TokenKind::Whitespace)
                    .collect();
                if index < tokens.len() && tokens[index].kind == TokenKind::DeclarationEnd {
                    index += 1;
                }
                if let Err(error) = properties::apply_declaration(
                    &mut rule.styles,
                    &name,
                    name_token,
                    &value,
                    layouts,
                    easings,
                ) {
                    rule.errors.push((error.token, error.message));
                }
            }
            _ => index += 1,
        }
    }
    (rule, index)
}
