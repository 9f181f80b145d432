use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Numeric id of the first catalog entry. Everything below it is reserved
/// for single-character symbols.
pub const NAMED_KIND_OFFSET: u32 = 256;

/// Characters accepted on their own as a token whose kind is the character.
pub const ALLOWED_SYMBOLS: &str = "(){}[],;+-*/%&|!";

/// Reserved words of the language, lower-case, in seeding order.
pub const RESERVED_WORDS: [&str; 21] = [
    "bool", "call", "char", "do", "else", "float", "for", "function", "if", "int", "main",
    "read", "return", "string", "then", "to", "void", "while", "write", "false", "true",
];

lazy_static! {
    pub static ref TOKENS: HashMap<&'static str, TokenName> = TokenName::ALL
        .iter()
        .map(|token| (token.name(), *token))
        .collect();
}

#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenName {
    BOOL,
    CALL,
    CHAR,
    CONST_CHAR,
    CONST_STRING,
    DIF, // <>
    DO,
    ELSE,
    FLOAT,
    FOR,
    FUNCTION,
    ID,
    IF,
    IGU, // =
    INT,
    MAI, // >=
    MAIN,
    MAY, // >
    MEI, // <=
    MEN, // <
    NUM,
    NUMF,
    READ,
    RETURN,
    STRING,
    THEN,
    TO,
    VOID,
    WHILE,
    WRITE,
    FALSE,
    TRUE,
}

impl TokenName {
    /// Catalog in declaration order; ids are assigned from this order.
    pub const ALL: [TokenName; 32] = [
        TokenName::BOOL,
        TokenName::CALL,
        TokenName::CHAR,
        TokenName::CONST_CHAR,
        TokenName::CONST_STRING,
        TokenName::DIF,
        TokenName::DO,
        TokenName::ELSE,
        TokenName::FLOAT,
        TokenName::FOR,
        TokenName::FUNCTION,
        TokenName::ID,
        TokenName::IF,
        TokenName::IGU,
        TokenName::INT,
        TokenName::MAI,
        TokenName::MAIN,
        TokenName::MAY,
        TokenName::MEI,
        TokenName::MEN,
        TokenName::NUM,
        TokenName::NUMF,
        TokenName::READ,
        TokenName::RETURN,
        TokenName::STRING,
        TokenName::THEN,
        TokenName::TO,
        TokenName::VOID,
        TokenName::WHILE,
        TokenName::WRITE,
        TokenName::FALSE,
        TokenName::TRUE,
    ];

    pub fn id(self) -> u32 {
        NAMED_KIND_OFFSET + self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenName::BOOL => "BOOL",
            TokenName::CALL => "CALL",
            TokenName::CHAR => "CHAR",
            TokenName::CONST_CHAR => "CONST_CHAR",
            TokenName::CONST_STRING => "CONST_STRING",
            TokenName::DIF => "DIF",
            TokenName::DO => "DO",
            TokenName::ELSE => "ELSE",
            TokenName::FLOAT => "FLOAT",
            TokenName::FOR => "FOR",
            TokenName::FUNCTION => "FUNCTION",
            TokenName::ID => "ID",
            TokenName::IF => "IF",
            TokenName::IGU => "IGU",
            TokenName::INT => "INT",
            TokenName::MAI => "MAI",
            TokenName::MAIN => "MAIN",
            TokenName::MAY => "MAY",
            TokenName::MEI => "MEI",
            TokenName::MEN => "MEN",
            TokenName::NUM => "NUM",
            TokenName::NUMF => "NUMF",
            TokenName::READ => "READ",
            TokenName::RETURN => "RETURN",
            TokenName::STRING => "STRING",
            TokenName::THEN => "THEN",
            TokenName::TO => "TO",
            TokenName::VOID => "VOID",
            TokenName::WHILE => "WHILE",
            TokenName::WRITE => "WRITE",
            TokenName::FALSE => "FALSE",
            TokenName::TRUE => "TRUE",
        }
    }

    /// Exact, case-sensitive lookup by catalog name.
    pub fn lookup(name: &str) -> Option<TokenName> {
        TOKENS.get(name).copied()
    }
}

impl Display for TokenName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classification of a lexeme: either a catalog entry or one of the
/// allowed single-character symbols.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Named(TokenName),
    Char(u8),
}

impl TokenKind {
    /// Numeric kind. `Char` codes are always below `NAMED_KIND_OFFSET`.
    pub fn code(self) -> u32 {
        match self {
            TokenKind::Named(name) => name.id(),
            TokenKind::Char(byte) => byte as u32,
        }
    }

    /// Kind for a character in `ALLOWED_SYMBOLS`, `None` for anything else.
    pub fn symbol(c: char) -> Option<TokenKind> {
        if c.is_ascii() && ALLOWED_SYMBOLS.contains(c) {
            Some(TokenKind::Char(c as u8))
        } else {
            None
        }
    }
}

impl From<TokenName> for TokenKind {
    fn from(name: TokenName) -> Self {
        TokenKind::Named(name)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Named(name) => write!(f, "{}", name),
            TokenKind::Char(byte) => write!(f, "'{}'", *byte as char),
        }
    }
}
