//! Utility macros for the lexer.
//!
//! - `MK_SYMBOL!` - Creates a Symbol instance
//! - `MK_ERROR!` - Creates an Error at a source position

/// Creates a Symbol instance.
///
/// # Arguments
///
/// * `$kind` - Anything convertible into a `TokenKind`
/// * `$lexeme` - The matched text
///
/// # Example
///
/// ```ignore
/// let symbol = MK_SYMBOL!(TokenName::MEI, "<=");
/// ```
#[macro_export]
macro_rules! MK_SYMBOL {
    ($kind:expr, $lexeme:expr) => {
        $crate::lexer::symbols::Symbol {
            kind: $crate::lexer::tokens::TokenKind::from($kind),
            lexeme: String::from($lexeme),
        }
    };
}

/// Creates an Error from an `ErrorImpl` variant and its fields.
///
/// # Example
///
/// ```ignore
/// let error = MK_ERROR!(LexicalError { lexeme: "@".to_string() }, position);
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($variant:ident { $($field:ident : $value:expr),* $(,)? }, $position:expr) => {
        $crate::errors::errors::Error::new(
            $crate::errors::errors::ErrorImpl::$variant { $($field: $value),* },
            $position,
        )
    };
}
