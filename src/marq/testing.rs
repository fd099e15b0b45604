//! Test factories for building tokens and token streams.
//!
//! Token constructors default the position to the stream start, so exact
//! sequence assertions can focus on kinds and values; tests that care
//! about positions build tokens with [`tok_at`].

use super::characters::Position;
use super::token::{Token, TokenKind, TokenStream};

/// Builds a token at the default (start) position.
pub fn tok(kind: TokenKind, value: &str) -> Token {
    Token::new(kind, value.to_string(), Position::start())
}

/// Builds a token at an explicit index/line/col.
pub fn tok_at(kind: TokenKind, value: &str, index: usize, line: usize, col: usize) -> Token {
    Token::new(kind, value.to_string(), Position { index, line, col })
}

/// Builds a replayable stream from (kind, value) pairs.
pub fn mk_stream(tokens: &[(TokenKind, &str)]) -> TokenStream {
    TokenStream::new(
        tokens
            .iter()
            .map(|(kind, value)| tok(*kind, value))
            .collect(),
    )
}
