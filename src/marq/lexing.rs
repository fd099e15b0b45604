//! Lexer.
//!
//! Turns the character stream into positioned tokens. Classification is a
//! single dispatch on the current character; rules that need to look past
//! one character (the two-character operators, numbers with a decimal
//! point) either peek once more or park an extra token in a small pending
//! queue that is drained before the stream is consulted again.
//!
//! Lexing never fails: any character no rule claims becomes a one-character
//! `passthrough` token, so punctuation, emoji, and other non-ASCII text
//! survive to the parser as literal text.
//!
//! Every token records the stream position captured before its characters
//! are consumed, so a token's position is always where its first character
//! sat in the source.

use std::collections::VecDeque;

use super::characters::CharacterStream;
use super::token::{Token, TokenKind, TokenStream};

/// Word characters form identifiers and shorthand names.
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Single-pass tokenizer over a character stream.
pub struct Lexer {
    source: CharacterStream,
    pending: VecDeque<Token>,
}

impl Lexer {
    pub fn new(source: CharacterStream) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// True once the pending queue is empty and the source is exhausted.
    pub fn eof(&self) -> bool {
        self.pending.is_empty() && self.source.eof()
    }

    /// Drains the lexer into a replayable token stream for the parser.
    pub fn stream(self) -> TokenStream {
        TokenStream::new(self.collect())
    }

    /// Produces the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }

        let ch = self.source.peek()?;
        let token = match ch {
            ' ' | '\t' => self.whitespace(),
            '#' => self.heading(),
            '\n' => self.single(TokenKind::Newline),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            '=' => self.single(TokenKind::Equals),
            '~' => self.single(TokenKind::Tilde),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '%' => self.single(TokenKind::Percent),
            '^' => self.single(TokenKind::Caret),
            '\\' => self.single(TokenKind::Backslash),
            '(' => self.single(TokenKind::OpenParen),
            ')' => self.single(TokenKind::CloseParen),
            '[' => self.single(TokenKind::OpenBracket),
            ']' => self.single(TokenKind::CloseBracket),
            '{' => self.single(TokenKind::OpenBrace),
            '}' => self.single(TokenKind::CloseBrace),
            '*' => self.doubled('*', TokenKind::Exponent, TokenKind::Asterisk),
            '/' => self.doubled('/', TokenKind::DoubleSlash, TokenKind::Slash),
            '$' => self.dollar(),
            '&' => self.and(),
            ch if ch.is_ascii_digit() => self.number(),
            ch if is_word_char(ch) => self.identifier(),
            _ => self.single(TokenKind::Passthrough),
        };
        Some(token)
    }

    /// Consumes exactly one character into a token of the given kind.
    fn single(&mut self, kind: TokenKind) -> Token {
        let position = self.source.position();
        let mut value = String::new();
        if let Some(ch) = self.source.next() {
            value.push(ch);
        }
        Token::new(kind, value, position)
    }

    /// Consumes one character, extending to two when `follow` comes next.
    fn doubled(&mut self, follow: char, double: TokenKind, single: TokenKind) -> Token {
        let position = self.source.position();
        let mut value = String::new();
        if let Some(ch) = self.source.next() {
            value.push(ch);
        }
        if self.source.peek() == Some(follow) {
            if let Some(ch) = self.source.next() {
                value.push(ch);
            }
            return Token::new(double, value, position);
        }
        Token::new(single, value, position)
    }

    /// Coalesces a run of spaces and tabs into one token.
    fn whitespace(&mut self) -> Token {
        let position = self.source.position();
        let mut value = String::new();
        while matches!(self.source.peek(), Some(' ') | Some('\t')) {
            if let Some(ch) = self.source.next() {
                value.push(ch);
            }
        }
        Token::new(TokenKind::Whitespace, value, position)
    }

    /// Coalesces a `#` run; the value's length is the heading level.
    fn heading(&mut self) -> Token {
        let position = self.source.position();
        let mut value = String::new();
        while self.source.peek() == Some('#') {
            if let Some(ch) = self.source.next() {
                value.push(ch);
            }
        }
        Token::new(TokenKind::Heading, value, position)
    }

    /// `$name` shorthand, or `$$name` when a second `$` follows directly.
    /// The value keeps the full matched text, prefix included.
    fn dollar(&mut self) -> Token {
        let position = self.source.position();
        let mut value = String::new();
        if let Some(ch) = self.source.next() {
            value.push(ch);
        }
        let kind = if self.source.peek() == Some('$') {
            if let Some(ch) = self.source.next() {
                value.push(ch);
            }
            TokenKind::DoubleDollar
        } else {
            TokenKind::Dollar
        };
        self.take_word_chars(&mut value);
        Token::new(kind, value, position)
    }

    /// `&name` shorthand; behaves like `dollar` but with a single prefix.
    fn and(&mut self) -> Token {
        let position = self.source.position();
        let mut value = String::new();
        if let Some(ch) = self.source.next() {
            value.push(ch);
        }
        self.take_word_chars(&mut value);
        Token::new(TokenKind::And, value, position)
    }

    /// Digit run, optionally extended past a `.` when more digits follow.
    /// A `.` with no digit after it is not part of the number; the consumed
    /// dot goes into the pending queue as its own token.
    fn number(&mut self) -> Token {
        let position = self.source.position();
        let mut value = String::new();
        self.take_digits(&mut value);
        if self.source.peek() == Some('.') {
            let dot_position = self.source.position();
            self.source.next();
            let mut fraction = String::new();
            self.take_digits(&mut fraction);
            if fraction.is_empty() {
                self.pending.push_back(Token::new(
                    TokenKind::Dot,
                    ".".to_string(),
                    dot_position,
                ));
            } else {
                value.push('.');
                value.push_str(&fraction);
                return Token::new(TokenKind::Float, value, position);
            }
        }
        Token::new(TokenKind::Integer, value, position)
    }

    /// Word-character run.
    fn identifier(&mut self) -> Token {
        let position = self.source.position();
        let mut value = String::new();
        self.take_word_chars(&mut value);
        Token::new(TokenKind::Identifier, value, position)
    }

    fn take_word_chars(&mut self, value: &mut String) {
        while matches!(self.source.peek(), Some(ch) if is_word_char(ch)) {
            if let Some(ch) = self.source.next() {
                value.push(ch);
            }
        }
    }

    fn take_digits(&mut self, value: &mut String) {
        while matches!(self.source.peek(), Some(ch) if ch.is_ascii_digit()) {
            if let Some(ch) = self.source.next() {
                value.push(ch);
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
