use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use dfa_lexer::{display_error, init_tracing, lexer::lexer::Scanner};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args[0]);
        return ExitCode::FAILURE;
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let mut scanner = Scanner::new(source.clone(), Some(file_name));
    let mut token_count = 0;
    let mut error_count = 0;

    while let Some(result) = scanner.next_token() {
        match result {
            Ok(symbol) => {
                println!(
                    "{:>4} | {:<14} {}",
                    scanner.line_number(),
                    symbol.kind.to_string(),
                    symbol
                );
                token_count += 1;
            }
            Err(error) => {
                display_error(&error, &source);
                error_count += 1;
            }
        }
    }

    println!(
        "Tokenized {} symbols ({} lexical errors, {} table entries) in {:?}",
        token_count,
        error_count,
        scanner.symbols().len(),
        start.elapsed()
    );

    if error_count > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
