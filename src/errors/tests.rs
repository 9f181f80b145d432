//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn lexical(lexeme: &str, line: u32) -> Error {
    Error::new(
        ErrorImpl::LexicalError {
            lexeme: lexeme.to_string(),
        },
        Position {
            offset: 4,
            line,
            file: Rc::new("test.src".to_string()),
        },
    )
}

#[test]
fn test_lexical_error_name() {
    assert_eq!(lexical("@", 1).get_error_name(), "LexicalError");
}

#[test]
fn test_error_position() {
    let error = lexical("@", 3);

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().offset, 4);
    assert_eq!(error.get_position().file.as_str(), "test.src");
}

#[test]
fn test_lexical_error_display() {
    assert_eq!(
        lexical("@", 2).to_string(),
        "ln: 2. lexical error: symbol not allowed: \"@\""
    );
}

#[test]
fn test_lexical_error_tip_lists_allowed_symbols() {
    match lexical("#", 1).get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert!(tip.contains('#'));
            assert!(tip.contains("(){}[],;+-*/%&|!"));
        }
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::new(
        ErrorImpl::InvalidArgument {
            message: "missing lexeme".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "InvalidArgument");
    assert_eq!(error.get_position().line, 0);
    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(
        error.get_error(),
        &ErrorImpl::InvalidArgument {
            message: "missing lexeme".to_string()
        }
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
