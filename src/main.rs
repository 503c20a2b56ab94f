use std::fs;

use clap::Parser;
use minilox::{interpreter::lexer::scan, parse_source, run};

/// minilox is a small, dynamically typed scripting language with variables,
/// lexical block scoping and a `print` statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minilox to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream instead of running the script.
    #[arg(short, long)]
    tokenize: bool,

    /// Print the parsed program as S-expressions instead of running it.
    #[arg(short, long)]
    parse: bool,

    /// Use the historical equality rule, where a lone `nil` left operand
    /// compares equal to anything.
    #[arg(long)]
    legacy_nil_equality: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.tokenize {
        tokenize(&script);
        return;
    }

    if args.parse {
        match parse_source(&script) {
            Ok(program) => {
                for statement in &program {
                    println!("{statement}");
                }
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(e.exit_code());
            },
        }
        return;
    }

    if let Err(e) = run(&script, args.legacy_nil_equality) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

/// Prints one line per token. Lexical errors go to stderr, valid tokens
/// still print, and any error makes the process exit with 65.
fn tokenize(script: &str) {
    let (tokens, errors) = scan(script);

    for error in &errors {
        eprintln!("[line {}] Error: {error}", error.line());
    }

    for (token, _) in &tokens {
        println!("{token}");
    }

    if !errors.is_empty() {
        std::process::exit(65);
    }
}
