//! The marq compiler pipeline.
//!
//! Compilation runs in four stages with explicit handoffs:
//!
//!     source text
//!       -> CharacterStream   one character at a time, line/col tracked
//!       -> Lexer             classified, positioned tokens
//!       -> TokenStream       replayable buffer consumed by the parser
//!       -> Parser            document tree (blocks + nested inlines)
//!       -> Generator         target-format text (LaTeX today)
//!
//! Each stage owns its input outright: the lexer drains the character
//! stream, the parser drains the token stream, and the resulting document
//! is immutable, so any number of generators can walk it afterwards. The
//! whole pipeline is synchronous and does no I/O.

pub mod ast;
pub mod characters;
pub mod error;
pub mod formats;
pub mod generating;
pub mod lexing;
pub mod parsing;
pub mod shortcuts;
pub mod testing;
pub mod token;

pub use ast::{Block, Document, Inline};
pub use characters::{CharacterStream, Position};
pub use error::{CompileError, GenerateError, ParseError};
pub use formats::LatexGenerator;
pub use generating::Generator;
pub use lexing::Lexer;
pub use parsing::Parser;
pub use token::{Token, TokenKind, TokenStream};

/// Lexes and parses source text into a document tree.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let lexer = Lexer::new(CharacterStream::new(source));
    let mut parser = Parser::new(lexer.stream());
    parser.parse()
}

/// Runs the full pipeline: source text in, LaTeX out.
pub fn compile_to_latex(source: &str) -> Result<String, CompileError> {
    let document = parse(source)?;
    let latex = LatexGenerator::new().generate(&document)?;
    Ok(latex)
}
