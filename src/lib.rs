#![allow(clippy::module_inception)]

use std::{rc::Rc, sync::Once};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Location of a lexeme in the source: character offset, 1-based line and
/// the name of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn null() -> Self {
        Position {
            offset: 0,
            line: 0,
            file: Rc::new(String::from("<null>")),
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the fmt subscriber. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=dfa_lexer=trace`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Returns the 1-based line number, the text of that line and the column
/// (0-based, in characters) of a character offset into `source`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: LexicalError (Symbol `@` is not allowed, ...)
        -> input.src
           |
        2  | a = @;
           | ----^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}:{}\n", position.file, position.line));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let removed = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (string.chars().skip(removed).collect(), removed)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(super::get_line_at_position(source, 200).is_none());
    }

    #[test]
    fn test_format_error_points_at_lexeme() {
        let source = "( )\n  a = @;\n";
        let error = Error::new(
            ErrorImpl::LexicalError {
                lexeme: "@".to_string(),
            },
            Position {
                offset: 10,
                line: 2,
                file: Rc::new("input.src".to_string()),
            },
        );

        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Error: LexicalError (Symbol `@`"));
        assert_eq!(lines[1], "-> input.src:2");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | a = @;");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_format_error_without_location() {
        let error = Error::new(
            ErrorImpl::InvalidArgument {
                message: "missing kind".to_string(),
            },
            Position::null(),
        );

        let rendered = super::format_error(&error, "");

        assert_eq!(rendered, "Error: InvalidArgument\n-> <null>:0\n");
    }
}
