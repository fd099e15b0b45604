//! Error types for parsing and generation.
//!
//! Lexing has no error type: every character is claimed by some rule, with
//! one-character passthrough as the universal fallback. Errors here are
//! raised at the point of detection and propagate uncaught through the
//! pipeline; the caller reports them.

use std::fmt;

use super::characters::Position;

/// Errors that abort a parse. Only malformed hyperlinks are structural
/// failures; every other construct degrades gracefully when input runs out.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A hyperlink production was entered on something other than `[`.
    ExpectedOpenBracket { position: Position },
    /// `(` did not immediately follow a hyperlink's `]`.
    ExpectedOpenParen { position: Position },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedOpenBracket { position } => {
                write!(f, "expected '[' to open a hyperlink at {}", position)
            }
            ParseError::ExpectedOpenParen { position } => {
                write!(f, "expected '(' after hyperlink text at {}", position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised while generating output from a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The formula name has no known rendering.
    UnknownFormula { name: String },
    /// A known formula was given an argument count it does not accept.
    FormulaArity {
        name: String,
        expected: &'static str,
        found: usize,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UnknownFormula { name } => {
                write!(f, "unknown formula '{}'", name)
            }
            GenerateError::FormulaArity {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "formula '{}' takes {} argument(s), got {}",
                    name, expected, found
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Either failure mode of the whole pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Parse(ParseError),
    Generate(GenerateError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Parse(error) => error.fmt(f),
            CompileError::Generate(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Parse(error) => Some(error),
            CompileError::Generate(error) => Some(error),
        }
    }
}

impl From<ParseError> for CompileError {
    fn from(error: ParseError) -> Self {
        CompileError::Parse(error)
    }
}

impl From<GenerateError> for CompileError {
    fn from(error: GenerateError) -> Self {
        CompileError::Generate(error)
    }
}
