//! Error types for the lexer.
//!
//! Errors carry the position of the offending lexeme so the driver can
//! render a diagnostic. Two kinds exist:
//!
//! - Lexical errors, returned by the scanner for characters outside the
//!   accepted set. Scanning continues after them.
//! - Invalid argument errors, raised by the symbol table when an insertion
//!   is missing its kind or lexeme.

pub mod errors;

#[cfg(test)]
mod tests;
