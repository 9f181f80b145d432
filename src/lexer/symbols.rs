use lazy_static::lazy_static;
use std::fmt::Display;

use crate::{errors::errors::Error, Position, MK_ERROR, MK_SYMBOL};

use super::tokens::{TokenKind, TokenName, RESERVED_WORDS};

lazy_static! {
    /// One symbol per reserved word, kind resolved through the catalog by
    /// the upper-cased spelling. Every scanner's table starts as a copy.
    pub static ref RESERVED_SYMBOLS: Vec<Symbol> = RESERVED_WORDS
        .iter()
        .map(|word| {
            let name = TokenName::lookup(&word.to_uppercase())
                .unwrap_or_else(|| panic!("reserved word {:?} has no catalog entry", word));
            MK_SYMBOL!(name, *word)
        })
        .collect();
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Symbol {
    pub fn new(kind: impl Into<TokenKind>, lexeme: impl Into<String>) -> Self {
        Symbol {
            kind: kind.into(),
            lexeme: lexeme.into(),
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.lexeme, self.kind.code())
    }
}

/// Ordered, append-only registry of symbols. Lookups return the first
/// symbol inserted with a given lexeme.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { symbols: vec![] }
    }

    /// A table holding exactly the reserved words.
    pub fn seeded() -> Self {
        SymbolTable {
            symbols: RESERVED_SYMBOLS.clone(),
        }
    }

    pub fn insert(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Inserts a symbol built from its parts. Both parts are required and the
    /// lexeme must not be empty.
    pub fn insert_parts(
        &mut self,
        kind: Option<TokenKind>,
        lexeme: Option<&str>,
    ) -> Result<(), Error> {
        match (kind, lexeme) {
            (Some(kind), Some(lexeme)) if !lexeme.is_empty() => {
                self.insert(MK_SYMBOL!(kind, lexeme));
                Ok(())
            }
            _ => Err(MK_ERROR!(
                InvalidArgument {
                    message: String::from("a symbol, or both a token kind and a lexeme, must be provided"),
                },
                Position::null()
            )),
        }
    }

    pub fn find(&self, lexeme: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.lexeme == lexeme)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
