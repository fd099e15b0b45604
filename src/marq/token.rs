//! Token types and the buffered token stream consumed by the parser.
//!
//! The set of token kinds is closed: the serialized names are the wire
//! contract between the lexer and everything downstream (the parser, the
//! CLI token dump, external tooling), so they must stay stable.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::characters::Position;

/// The closed set of token kinds produced by the lexer.
///
/// `String` and `Forwardslash` are reserved wire names the lexer does not
/// currently produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Passthrough,
    String,
    Whitespace,
    Integer,
    Float,
    Identifier,
    Heading,
    Newline,
    Colon,
    Comma,
    Dot,
    Equals,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Exponent,
    DoubleSlash,
    Caret,
    Tilde,
    Dollar,
    DoubleDollar,
    And,
    Backslash,
    Forwardslash,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
}

impl TokenKind {
    /// The stable wire name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Passthrough => "passthrough",
            TokenKind::String => "string",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Identifier => "identifier",
            TokenKind::Heading => "heading",
            TokenKind::Newline => "newline",
            TokenKind::Colon => "colon",
            TokenKind::Comma => "comma",
            TokenKind::Dot => "dot",
            TokenKind::Equals => "equals",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Asterisk => "asterisk",
            TokenKind::Slash => "slash",
            TokenKind::Percent => "percent",
            TokenKind::Exponent => "exponent",
            TokenKind::DoubleSlash => "doubleSlash",
            TokenKind::Caret => "caret",
            TokenKind::Tilde => "tilde",
            TokenKind::Dollar => "dollar",
            TokenKind::DoubleDollar => "doubleDollar",
            TokenKind::And => "and",
            TokenKind::Backslash => "backslash",
            TokenKind::Forwardslash => "forwardslash",
            TokenKind::OpenParen => "openParen",
            TokenKind::CloseParen => "closeParen",
            TokenKind::OpenBracket => "openBracket",
            TokenKind::CloseBracket => "closeBracket",
            TokenKind::OpenBrace => "openBrace",
            TokenKind::CloseBrace => "closeBrace",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned lexical unit. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    #[serde(flatten)]
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: String, position: Position) -> Self {
        Self {
            kind,
            value,
            position,
        }
    }
}

/// A finite, replayable buffer of lexed tokens.
///
/// This is the handoff point between the lexer and the parser: the lexer
/// drains itself into one of these, and the parser consumes it with a
/// single token of lookahead.
pub struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Number of tokens consumed so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Source position of the most recently consumed token, or the start
    /// position when nothing has been consumed yet.
    pub fn position(&self) -> Position {
        self.index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|token| token.position)
            .unwrap_or_default()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// Returns the kind of the next token without consuming it.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Consumes and returns the next token.
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// True once every token has been consumed.
    pub fn eof(&self) -> bool {
        self.index >= self.tokens.len()
    }
}
