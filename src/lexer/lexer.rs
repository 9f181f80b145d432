use std::{iter::FusedIterator, rc::Rc};

use tracing::{debug, trace};

use crate::{errors::errors::Error, Position, MK_ERROR, MK_SYMBOL};

use super::{
    symbols::{Symbol, SymbolTable},
    tokens::{TokenKind, TokenName},
};

/// Appended to every source so the lookahead states always have a
/// character to look at.
const SENTINEL: char = ' ';

/// Automaton states that can survive between two characters. Accepting
/// states are not represented: reaching one emits a symbol immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Dispatch on the first character of a lexeme.
    Start,
    /// `<` seen.
    Less,
    /// `>` seen.
    Greater,
    /// Inside a word.
    Word,
}

/// What an accepting transition produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Kind(TokenKind),
    /// Kind depends on the symbol table: reserved word or identifier.
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Blank outside of a lexeme.
    Skip,
    Newline,
    EndOfInput,
    Shift(State),
    /// The character just read completes the lexeme.
    Accept(Emit),
    /// The character just read does not extend the lexeme: give it back,
    /// then accept what came before it.
    Retract(Emit),
    /// The character cannot start any lexeme.
    Reject,
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn named(name: TokenName) -> Emit {
    Emit::Kind(TokenKind::Named(name))
}

/// Transition function of the automaton. `None` is the end of the buffer.
pub fn transition(state: State, input: Option<char>) -> Transition {
    match (state, input) {
        (State::Start, None) => Transition::EndOfInput,
        (State::Start, Some(' ' | '\t')) => Transition::Skip,
        (State::Start, Some('\n')) => Transition::Newline,
        (State::Start, Some('<')) => Transition::Shift(State::Less),
        (State::Start, Some('=')) => Transition::Accept(named(TokenName::IGU)),
        (State::Start, Some('>')) => Transition::Shift(State::Greater),
        (State::Start, Some(c)) if is_word_start(c) => Transition::Shift(State::Word),
        (State::Start, Some(c)) => match TokenKind::symbol(c) {
            Some(kind) => Transition::Accept(Emit::Kind(kind)),
            None => Transition::Reject,
        },

        (State::Less, Some('=')) => Transition::Accept(named(TokenName::MEI)),
        (State::Less, Some('>')) => Transition::Accept(named(TokenName::DIF)),
        (State::Less, _) => Transition::Retract(named(TokenName::MEN)),

        (State::Greater, Some('=')) => Transition::Accept(named(TokenName::MAI)),
        (State::Greater, _) => Transition::Retract(named(TokenName::MAY)),

        (State::Word, Some(c)) if is_word_continue(c) => Transition::Shift(State::Word),
        (State::Word, _) => Transition::Retract(Emit::Word),
    }
}

pub struct Scanner {
    source: Vec<char>,
    symbols: SymbolTable,
    /// Index of the next character to read.
    cursor: usize,
    lexeme_start: usize,
    line_number: u32,
    state: State,
    lexeme: String,
    file: Rc<String>,
}

impl Scanner {
    pub fn new(source: String, file: Option<String>) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<source>"))
        };

        let mut chars: Vec<char> = source.chars().collect();
        chars.push(SENTINEL);

        let symbols = SymbolTable::seeded();
        debug!(file = %file_name, reserved = symbols.len(), "seeded symbol table");

        Scanner {
            source: chars,
            symbols,
            cursor: 0,
            lexeme_start: 0,
            line_number: 1,
            state: State::Start,
            lexeme: String::new(),
            file: file_name,
        }
    }

    /// Returns the next symbol, a recoverable lexical error, or `None` once
    /// the source is exhausted.
    pub fn next_token(&mut self) -> Option<Result<Symbol, Error>> {
        loop {
            let input = self.next_char();

            match transition(self.state, input) {
                Transition::Skip => self.advance_lexeme_start(),
                Transition::Newline => {
                    self.advance_lexeme_start();
                    self.line_number += 1;
                }
                Transition::EndOfInput => return None,
                Transition::Shift(state) => self.state = state,
                Transition::Accept(emit) => return Some(Ok(self.accept(emit))),
                Transition::Retract(emit) => {
                    if input.is_some() {
                        self.retract();
                    }
                    return Some(Ok(self.accept(emit)));
                }
                Transition::Reject => return Some(Err(self.reject())),
            }
        }
    }

    /// Number of characters consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn lexeme_start(&self) -> usize {
        self.lexeme_start
    }

    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Text of the last lexeme produced, accepted or rejected.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.source.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(c)
    }

    fn retract(&mut self) {
        self.cursor -= 1;
    }

    fn advance_lexeme_start(&mut self) {
        self.lexeme_start = self.cursor;
    }

    fn read_lexeme(&mut self) -> String {
        self.lexeme = self.source[self.lexeme_start..self.cursor].iter().collect();
        self.advance_lexeme_start();
        self.state = State::Start;
        self.lexeme.clone()
    }

    fn current_position(&self) -> Position {
        Position {
            offset: self.lexeme_start as u32,
            line: self.line_number,
            file: Rc::clone(&self.file),
        }
    }

    fn accept(&mut self, emit: Emit) -> Symbol {
        let lexeme = self.read_lexeme();
        let kind = match emit {
            Emit::Kind(kind) => kind,
            Emit::Word => self.resolve_word(&lexeme),
        };

        trace!(line = self.line_number, %kind, lexeme = %lexeme, "accepted");
        MK_SYMBOL!(kind, lexeme)
    }

    /// Reserved words and known identifiers come from the table; anything
    /// else is a new identifier and gets registered.
    fn resolve_word(&mut self, lexeme: &str) -> TokenKind {
        if let Some(symbol) = self.symbols.find(lexeme) {
            return symbol.kind;
        }

        let kind = TokenKind::Named(TokenName::ID);
        self.symbols.insert(MK_SYMBOL!(kind, lexeme));
        kind
    }

    fn reject(&mut self) -> Error {
        let position = self.current_position();
        let lexeme = self.read_lexeme();

        debug!(line = position.line, lexeme = %lexeme, "symbol not allowed");
        MK_ERROR!(LexicalError { lexeme: lexeme }, position)
    }
}

impl Iterator for Scanner {
    type Item = Result<Symbol, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Scanner {}

/// Scans the whole source, collecting symbols and the lexical errors
/// recovered from along the way.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Symbol>, Vec<Error>) {
    let mut symbols = vec![];
    let mut errors = vec![];

    for result in Scanner::new(source, file) {
        match result {
            Ok(symbol) => symbols.push(symbol),
            Err(error) => errors.push(error),
        }
    }

    (symbols, errors)
}
