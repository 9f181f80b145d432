//! Lexical analysis module.
//!
//! Converts source text into symbols (token kind + lexeme) using a
//! hand-built deterministic automaton:
//!
//! - `tokens` - the token catalog, reserved words and allowed symbols
//! - `symbols` - symbols and the symbol table seeded with reserved words
//! - `lexer` - the scanner, its states and transition function

pub mod lexer;
pub mod symbols;
pub mod tokens;
