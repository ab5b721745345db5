//! Integration tests for variable substitution.
//!
//! Substitution is checked token by token: definitions must pass through
//! verbatim, usages must expand to copies carrying the definition-site
//! location plus a `referenced_by` stamp pointing at the usage.

use tss::error::SubstituteError;
use tss::parser::{ReferencedBy, Token, TokenKind, substitute_references, tokenize};

fn substitute(css: &str) -> Vec<Token> {
    substitute_references(tokenize(css, ""))
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn token(kind: TokenKind, value: &str, css: &str, location: (usize, usize)) -> Token {
    Token::new(kind, value, "", css, location)
}

fn referenced(
    token: Token,
    name: &str,
    location: (usize, usize),
    length: usize,
) -> Token {
    token.with_reference(ReferencedBy {
        name: name.to_string(),
        location,
        length,
    })
}

// ============================================================================
// SIMPLE REFERENCES
// ============================================================================

#[test]
fn test_simple_reference() {
    use TokenKind::*;
    let css = "$x: 1; #some-widget{border: $x;}";
    assert_eq!(
        substitute(css),
        vec![
            token(VariableName, "$x:", css, (0, 0)),
            token(Whitespace, " ", css, (0, 3)),
            token(Number, "1", css, (0, 4)),
            token(VariableValueEnd, ";", css, (0, 5)),
            token(Whitespace, " ", css, (0, 6)),
            token(SelectorStartId, "#some-widget", css, (0, 7)),
            token(DeclarationSetStart, "{", css, (0, 19)),
            token(DeclarationName, "border:", css, (0, 20)),
            token(Whitespace, " ", css, (0, 27)),
            referenced(token(Number, "1", css, (0, 4)), "x", (0, 28), 2),
            token(DeclarationEnd, ";", css, (0, 30)),
            token(DeclarationSetEnd, "}", css, (0, 31)),
        ]
    );
}

#[test]
fn test_simple_reference_no_whitespace() {
    use TokenKind::*;
    let css = "$x:1; #some-widget{border: $x;}";
    assert_eq!(
        substitute(css),
        vec![
            token(VariableName, "$x:", css, (0, 0)),
            token(Number, "1", css, (0, 3)),
            token(VariableValueEnd, ";", css, (0, 4)),
            token(Whitespace, " ", css, (0, 5)),
            token(SelectorStartId, "#some-widget", css, (0, 6)),
            token(DeclarationSetStart, "{", css, (0, 18)),
            token(DeclarationName, "border:", css, (0, 19)),
            token(Whitespace, " ", css, (0, 26)),
            referenced(token(Number, "1", css, (0, 3)), "x", (0, 27), 2),
            token(DeclarationEnd, ";", css, (0, 29)),
            token(DeclarationSetEnd, "}", css, (0, 30)),
        ]
    );
}

#[test]
fn test_undefined_variable() {
    let css = ".thing { border: $not-defined; }";
    let error = substitute_references(tokenize(css, ""))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_err();
    match error {
        SubstituteError::UnresolvedVariable(error) => {
            assert_eq!(error.name, "not-defined");
        }
        other => panic!("expected UnresolvedVariableError, got {other:?}"),
    }
}

// ============================================================================
// TRANSITIVE AND MULTI-VALUE EXPANSION
// ============================================================================

#[test]
fn test_transitive_reference() {
    use TokenKind::*;
    let css = "$x: 1\n$y: $x\n.thing { border: $y }";
    assert_eq!(
        substitute(css),
        vec![
            token(VariableName, "$x:", css, (0, 0)),
            token(Whitespace, " ", css, (0, 3)),
            token(Number, "1", css, (0, 4)),
            token(VariableValueEnd, "\n", css, (0, 5)),
            token(VariableName, "$y:", css, (1, 0)),
            token(Whitespace, " ", css, (1, 3)),
            referenced(token(Number, "1", css, (0, 4)), "x", (1, 4), 2),
            token(VariableValueEnd, "\n", css, (1, 6)),
            token(SelectorStartClass, ".thing", css, (2, 0)),
            token(Whitespace, " ", css, (2, 6)),
            token(DeclarationSetStart, "{", css, (2, 7)),
            token(Whitespace, " ", css, (2, 8)),
            token(DeclarationName, "border:", css, (2, 9)),
            token(Whitespace, " ", css, (2, 16)),
            referenced(token(Number, "1", css, (0, 4)), "y", (2, 17), 2),
            token(Whitespace, " ", css, (2, 19)),
            token(DeclarationSetEnd, "}", css, (2, 20)),
        ]
    );
}

#[test]
fn test_multi_value_variable() {
    use TokenKind::*;
    let css = "$x: 2 4\n$y: 6 $x 2\n.thing { border: $y }";
    assert_eq!(
        substitute(css),
        vec![
            token(VariableName, "$x:", css, (0, 0)),
            token(Whitespace, " ", css, (0, 3)),
            token(Number, "2", css, (0, 4)),
            token(Whitespace, " ", css, (0, 5)),
            token(Number, "4", css, (0, 6)),
            token(VariableValueEnd, "\n", css, (0, 7)),
            token(VariableName, "$y:", css, (1, 0)),
            token(Whitespace, " ", css, (1, 3)),
            token(Number, "6", css, (1, 4)),
            token(Whitespace, " ", css, (1, 5)),
            referenced(token(Number, "2", css, (0, 4)), "x", (1, 6), 2),
            referenced(token(Whitespace, " ", css, (0, 5)), "x", (1, 6), 2),
            referenced(token(Number, "4", css, (0, 6)), "x", (1, 6), 2),
            token(Whitespace, " ", css, (1, 8)),
            token(Number, "2", css, (1, 9)),
            token(VariableValueEnd, "\n", css, (1, 10)),
            token(SelectorStartClass, ".thing", css, (2, 0)),
            token(Whitespace, " ", css, (2, 6)),
            token(DeclarationSetStart, "{", css, (2, 7)),
            token(Whitespace, " ", css, (2, 8)),
            token(DeclarationName, "border:", css, (2, 9)),
            token(Whitespace, " ", css, (2, 16)),
            referenced(token(Number, "6", css, (1, 4)), "y", (2, 17), 2),
            referenced(token(Whitespace, " ", css, (1, 5)), "y", (2, 17), 2),
            referenced(token(Number, "2", css, (0, 4)), "y", (2, 17), 2),
            referenced(token(Whitespace, " ", css, (0, 5)), "y", (2, 17), 2),
            referenced(token(Number, "4", css, (0, 6)), "y", (2, 17), 2),
            referenced(token(Whitespace, " ", css, (1, 8)), "y", (2, 17), 2),
            referenced(token(Number, "2", css, (1, 9)), "y", (2, 17), 2),
            token(Whitespace, " ", css, (2, 19)),
            token(DeclarationSetEnd, "}", css, (2, 20)),
        ]
    );
}

#[test]
fn test_variable_used_inside_property_value() {
    use TokenKind::*;
    let css = "$x: red\n.thing { border: on $x; }";
    assert_eq!(
        substitute(css),
        vec![
            token(VariableName, "$x:", css, (0, 0)),
            token(Whitespace, " ", css, (0, 3)),
            token(Token, "red", css, (0, 4)),
            token(VariableValueEnd, "\n", css, (0, 7)),
            token(SelectorStartClass, ".thing", css, (1, 0)),
            token(Whitespace, " ", css, (1, 6)),
            token(DeclarationSetStart, "{", css, (1, 7)),
            token(Whitespace, " ", css, (1, 8)),
            token(DeclarationName, "border:", css, (1, 9)),
            token(Whitespace, " ", css, (1, 16)),
            token(Token, "on", css, (1, 17)),
            token(Whitespace, " ", css, (1, 19)),
            referenced(token(Token, "red", css, (0, 4)), "x", (1, 20), 2),
            token(DeclarationEnd, ";", css, (1, 22)),
            token(Whitespace, " ", css, (1, 23)),
            token(DeclarationSetEnd, "}", css, (1, 24)),
        ]
    );
}

// ============================================================================
// DEFINITION EDGE CASES
// ============================================================================

#[test]
fn test_variable_definition_eof() {
    use TokenKind::*;
    let css = "$x: 1";
    assert_eq!(
        substitute(css),
        vec![
            token(VariableName, "$x:", css, (0, 0)),
            token(Whitespace, " ", css, (0, 3)),
            token(Number, "1", css, (0, 4)),
        ]
    );
}

#[test]
fn test_variable_reference_whitespace_trimming() {
    use TokenKind::*;
    let css = "$x:    123;.thing{border: $x}";
    assert_eq!(
        substitute(css),
        vec![
            token(VariableName, "$x:", css, (0, 0)),
            token(Whitespace, "    ", css, (0, 3)),
            token(Number, "123", css, (0, 7)),
            token(VariableValueEnd, ";", css, (0, 10)),
            token(SelectorStartClass, ".thing", css, (0, 11)),
            token(DeclarationSetStart, "{", css, (0, 17)),
            token(DeclarationName, "border:", css, (0, 18)),
            token(Whitespace, " ", css, (0, 25)),
            referenced(token(Number, "123", css, (0, 7)), "x", (0, 26), 2),
            token(DeclarationSetEnd, "}", css, (0, 28)),
        ]
    );
}

// ============================================================================
// STREAM-LEVEL PROPERTIES
// ============================================================================

#[test]
fn test_order_preserved_without_variables() {
    let css = "#a { color: red; }\n.b { margin: 1 2; }";
    let plain: Vec<Token> = tokenize(css, "")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(substitute(css), plain);
}

#[test]
fn test_unused_definition_is_still_emitted() {
    let css = "$unused: 3;\n.a { color: red; }";
    let tokens = substitute(css);
    assert!(
        tokens
            .iter()
            .any(|t| t.kind == TokenKind::VariableName && t.value == "$unused:")
    );
    assert!(tokens.iter().all(|t| t.referenced_by.is_none()));
}
