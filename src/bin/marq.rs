//! Command-line interface for marq
//! Compiles marq documents into LaTeX, or dumps the token stream / AST for inspection.
//!
//! Usage:
//!   marq compile `<path>` [--format `<format>`]  - Compile a marq file
//!   marq shortcuts                             - List the shortcut registry

use clap::{Arg, Command};

use marq::marq::{compile_to_latex, parse, shortcuts, CharacterStream, Lexer, Token};

fn main() {
    let matches = Command::new("marq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for the marq markup format")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compile")
                .about("Compile a marq file")
                .arg(
                    Arg::new("path")
                        .help("Path to the marq file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g. 'latex', 'ast-json', 'tokens-json')")
                        .default_value("latex"),
                ),
        )
        .subcommand(Command::new("shortcuts").about("List the shortcut registry"))
        .get_matches();

    match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let path = compile_matches.get_one::<String>("path").unwrap();
            let format = compile_matches.get_one::<String>("format").unwrap();
            handle_compile_command(path, format);
        }
        Some(("shortcuts", _)) => {
            handle_shortcuts_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the compile command
fn handle_compile_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let output = compile(&source, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

fn compile(source: &str, format: &str) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        "latex" => Ok(compile_to_latex(source)?),
        "ast-json" => {
            let document = parse(source)?;
            Ok(serde_json::to_string_pretty(&document)?)
        }
        "tokens-json" => {
            let tokens: Vec<Token> = Lexer::new(CharacterStream::new(source)).collect();
            Ok(serde_json::to_string_pretty(&tokens)?)
        }
        other => Err(format!("unknown output format '{}'", other).into()),
    }
}

/// Handle the shortcuts command
fn handle_shortcuts_command() {
    println!("Known shortcuts:\n");
    for shortcut in shortcuts::SHORTCUTS {
        println!("  ${:<16} {}  ({})", shortcut.name, shortcut.value, shortcut.entity);
    }
}
