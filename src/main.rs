//! MineLang CLI - translate .mina sources to Python

use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use minelang::{errors::print_error, CodeGenerator, KeywordTable, Lexer, PythonTranslator};

/// Exit code for lexical and translation errors
const EXIT_TRANSLATION_ERROR: u8 = 2;

fn print_usage() {
    println!("MineLang - MineLang to Python translator");
    println!(
        "Version {} (keyword table v{})",
        env!("CARGO_PKG_VERSION"),
        KeywordTable::VERSION
    );
    println!();
    println!("Usage: minelang <input.mina> [options]");
    println!();
    println!("Options:");
    println!("  -o, --output <file>    Output file (default: input name with .py)");
    println!("      --indent <n>       Spaces per indentation level (default: 4)");
    println!("  -v, --verbose          Enable debug logging");
    println!();
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Default output path: `x.mina` becomes `x.py`, anything else gets `.py` appended
fn default_output(input: &str, ext: &str) -> String {
    let path = Path::new(input);
    let is_mina = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("mina"));

    if is_mina {
        path.with_extension(ext).to_string_lossy().into_owned()
    } else {
        format!("{}.{}", input, ext)
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || matches!(args[1].as_str(), "-h" | "--help") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let filename = &args[1];

    // Parse arguments
    let mut output = None;
    let mut indent = 4;
    let mut verbose = false;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                if i + 1 < args.len() {
                    output = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: -o requires an output path");
                    return ExitCode::FAILURE;
                }
            }
            "--indent" => match args.get(i + 1).map(|n| n.parse::<usize>()) {
                Some(Ok(n)) if n > 0 => {
                    indent = n;
                    i += 2;
                }
                _ => {
                    eprintln!("Error: --indent requires a positive number");
                    return ExitCode::FAILURE;
                }
            },
            "-v" | "--verbose" => {
                verbose = true;
                i += 1;
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                return ExitCode::FAILURE;
            }
        }
    }

    init_tracing(verbose);

    let source = match fs::read_to_string(filename) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {}", filename, e);
            return ExitCode::FAILURE;
        }
    };

    // Lex
    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            print_error(&source, filename, &e);
            return ExitCode::from(EXIT_TRANSLATION_ERROR);
        }
    };

    // Translate
    let mut generator = PythonTranslator::new().with_indent_width(indent);
    let code = match generator.generate(&tokens) {
        Ok(code) => code,
        Err(e) => {
            print_error(&source, filename, &e);
            return ExitCode::from(EXIT_TRANSLATION_ERROR);
        }
    };

    // Write output
    let output_path = output.unwrap_or_else(|| default_output(filename, generator.file_extension()));
    tracing::debug!("Writing {} output to {}", generator.language_name(), output_path);

    match fs::write(&output_path, &code) {
        Ok(_) => {
            println!("OK: generated '{}'", output_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing '{}': {}", output_path, e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        assert_eq!(default_output("prog.mina", "py"), "prog.py");
        assert_eq!(default_output("dir/PROG.MINA", "py"), "dir/PROG.py");
        assert_eq!(default_output("prog.txt", "py"), "prog.txt.py");
        assert_eq!(default_output("prog", "py"), "prog.py");
    }
}
