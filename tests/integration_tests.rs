//! Integration tests for the public lexer API.
//!
//! These drive a scanner the way a parser would: pull symbols until the
//! source is exhausted, collecting recovered errors on the side.

use dfa_lexer::{
    format_error,
    lexer::{
        lexer::{tokenize, Scanner},
        symbols::Symbol,
        tokens::{TokenKind, TokenName},
    },
};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "function void main()\n{\n  while (i <= n) do\n    if (i <> n) then write(i);\n  read(n);\n}\n";

#[test]
fn test_scan_program() {
    let (symbols, errors) = tokenize(PROGRAM.to_string(), Some("program.src".to_string()));

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

    let lexemes: Vec<&str> = symbols.iter().map(|s| s.lexeme.as_str()).collect();
    assert_eq!(
        lexemes,
        vec![
            "function", "void", "main", "(", ")", "{", "while", "(", "i", "<=", "n", ")", "do",
            "if", "(", "i", "<>", "n", ")", "then", "write", "(", "i", ")", ";", "read", "(",
            "n", ")", ";", "}",
        ]
    );

    assert_eq!(symbols[0].kind, TokenKind::Named(TokenName::FUNCTION));
    assert_eq!(symbols[2].kind.code(), 272);
    assert_eq!(symbols[9], Symbol::new(TokenName::MEI, "<="));
    assert_eq!(symbols[16], Symbol::new(TokenName::DIF, "<>"));
    assert_eq!(symbols[30].kind.code(), '}' as u32);
}

#[test]
fn test_scanner_as_iterator() {
    let scanner = Scanner::new("x >= y; z > 1".to_string(), None);
    let results: Vec<_> = scanner.collect();

    assert_eq!(results.len(), 7);
    assert!(results[..6].iter().all(|result| result.is_ok()));
    assert!(results[6].is_err());

    let kinds: Vec<u32> = results
        .iter()
        .filter_map(|result| result.as_ref().ok())
        .map(|symbol| symbol.kind.code())
        .collect();
    assert_eq!(kinds, vec![267, 271, 267, ';' as u32, 267, 273]);
}

#[test]
fn test_line_tracking_across_program() {
    let mut scanner = Scanner::new(PROGRAM.to_string(), None);
    let mut lines = vec![];

    while let Some(result) = scanner.next_token() {
        let symbol = result.unwrap();
        if symbol.lexeme == "read" || symbol.lexeme == "write" {
            lines.push((symbol.lexeme, scanner.line_number()));
        }
    }

    assert_eq!(
        lines,
        vec![("write".to_string(), 4), ("read".to_string(), 5)]
    );
    assert_eq!(scanner.line_number(), 7);
}

#[test]
fn test_errors_are_reported_and_scanning_continues() {
    let source = "a = b;\nc = \"d\" # e;\n";
    let (symbols, errors) = tokenize(source.to_string(), Some("errors.src".to_string()));

    let reported: Vec<(u32, String)> = errors
        .iter()
        .map(|error| (error.get_position().line, error.to_string()))
        .collect();
    assert_eq!(
        reported,
        vec![
            (2, "ln: 2. lexical error: symbol not allowed: \"\\\"\"".to_string()),
            (2, "ln: 2. lexical error: symbol not allowed: \"\\\"\"".to_string()),
            (2, "ln: 2. lexical error: symbol not allowed: \"#\"".to_string()),
        ]
    );

    let lexemes: Vec<&str> = symbols.iter().map(|s| s.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["a", "=", "b", ";", "c", "=", "d", "e", ";"]);

    let rendered = format_error(&errors[2], source);
    assert!(rendered.contains("-> errors.src:2"));
    assert!(rendered.contains("2 | c = \"d\" # e;"));
}

#[test]
fn test_independent_scanners() {
    let mut first = Scanner::new("one two three".to_string(), None);
    while first.next_token().is_some() {}

    let second = Scanner::new(String::new(), None);

    assert_eq!(first.symbols().len(), 24);
    assert_eq!(second.symbols().len(), 21);
    assert!(second.symbols().find("two").is_none());
    assert_eq!(
        second.symbols().find("while"),
        Some(&Symbol::new(TokenName::WHILE, "while"))
    );
}
