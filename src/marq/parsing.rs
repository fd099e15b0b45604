//! Parser.
//!
//! Recursive descent over the token stream with a single token of
//! lookahead and no backtracking: every production either commits to the
//! token it peeked or falls through to the plain-text default, so each
//! loop consumes at least one token per iteration and the grammar always
//! terminates.
//!
//! Delimited inline constructs (bold, italic, strikethrough) close on the
//! first token whose *kind* matches the opening delimiter. That allows
//! nesting constructs of different kinds while a same-kind reappearance
//! always closes — there is no same-kind nesting.
//!
//! Running out of input inside a construct keeps whatever content was
//! collected so far; only a malformed hyperlink is a hard error.

use super::ast::nodes::{
    Argument, Block, Bold, Document, Formula, Heading, Hyperlink, Inline, Italic, Paragraph,
    Strikethrough, Text,
};
use super::error::ParseError;
use super::shortcuts;
use super::token::{TokenKind, TokenStream};

pub struct Parser {
    tokens: TokenStream,
}

impl Parser {
    pub fn new(tokens: TokenStream) -> Self {
        Self { tokens }
    }

    /// Parses the whole token stream into a document.
    pub fn parse(&mut self) -> Result<Document, ParseError> {
        let mut children = Vec::new();
        while !self.tokens.eof() {
            children.push(self.parse_node()?);
        }
        Ok(Document::new(children))
    }

    fn parse_node(&mut self) -> Result<Block, ParseError> {
        if self.tokens.peek_kind() == Some(TokenKind::Heading) {
            Ok(Block::Heading(self.parse_heading()?))
        } else {
            Ok(Block::Paragraph(self.parse_paragraph()?))
        }
    }

    fn parse_heading(&mut self) -> Result<Heading, ParseError> {
        let marker = self.tokens.next().map(|token| token.value).unwrap_or_default();
        let level = marker.chars().count();

        // Whitespace right after the marker separates it from the title.
        if self.tokens.peek_kind() == Some(TokenKind::Whitespace) {
            self.tokens.next();
        }

        let text = self.collect_until_newline()?;
        Ok(Heading { level, text })
    }

    fn parse_paragraph(&mut self) -> Result<Paragraph, ParseError> {
        let text = self.collect_until_newline()?;
        Ok(Paragraph { text })
    }

    /// Collects inline content up to a newline or the end of input and
    /// consumes the terminating newline.
    fn collect_until_newline(&mut self) -> Result<Inline, ParseError> {
        let mut children = Vec::new();
        while !self.tokens.eof() && self.tokens.peek_kind() != Some(TokenKind::Newline) {
            children.push(self.parse_text_based()?);
        }
        self.tokens.next();
        Ok(Inline::join(children))
    }

    fn parse_text_based(&mut self) -> Result<Inline, ParseError> {
        match self.tokens.peek_kind() {
            Some(TokenKind::OpenBracket) => self.parse_hyperlink(),
            Some(TokenKind::Dollar) => Ok(self.parse_dollar()),
            Some(TokenKind::And) => Ok(self.parse_and()),
            Some(TokenKind::DoubleDollar) => self.parse_formula(),
            Some(TokenKind::Exponent) => self.parse_bold(),
            Some(TokenKind::Asterisk) => self.parse_italic(),
            Some(TokenKind::Tilde) => self.parse_strikethrough(),
            _ => Ok(self.parse_text_run()),
        }
    }

    fn parse_bold(&mut self) -> Result<Inline, ParseError> {
        let content = self.parse_delimited(TokenKind::Exponent)?;
        Ok(Inline::Bold(Bold {
            text: Box::new(content),
        }))
    }

    fn parse_italic(&mut self) -> Result<Inline, ParseError> {
        let content = self.parse_delimited(TokenKind::Asterisk)?;
        Ok(Inline::Italic(Italic {
            text: Box::new(content),
        }))
    }

    fn parse_strikethrough(&mut self) -> Result<Inline, ParseError> {
        let content = self.parse_delimited(TokenKind::Tilde)?;
        Ok(Inline::Strikethrough(Strikethrough {
            text: Box::new(content),
        }))
    }

    /// Consumes the opening delimiter, collects inline content until a
    /// token of the same kind (or end of input), then consumes the closer.
    fn parse_delimited(&mut self, kind: TokenKind) -> Result<Inline, ParseError> {
        self.tokens.next();
        let mut children = Vec::new();
        while !self.tokens.eof() && self.tokens.peek_kind() != Some(kind) {
            children.push(self.parse_text_based()?);
        }
        self.tokens.next();
        Ok(Inline::join(children))
    }

    /// `[alt](url)`. The URL segment is parsed like any inline content and
    /// then flattened back to its source text, so shortcuts expand inside
    /// URLs while formatting markup collapses to its markers.
    fn parse_hyperlink(&mut self) -> Result<Inline, ParseError> {
        let opener = self.tokens.next();
        if !matches!(&opener, Some(token) if token.kind == TokenKind::OpenBracket) {
            return Err(ParseError::ExpectedOpenBracket {
                position: opener
                    .map(|token| token.position)
                    .unwrap_or_else(|| self.tokens.position()),
            });
        }

        let mut alt = Vec::new();
        while !self.tokens.eof() && self.tokens.peek_kind() != Some(TokenKind::CloseBracket) {
            alt.push(self.parse_text_based()?);
        }
        self.tokens.next();

        if self.tokens.peek_kind() != Some(TokenKind::OpenParen) {
            return Err(ParseError::ExpectedOpenParen {
                position: self.tokens.position(),
            });
        }
        self.tokens.next();

        let mut href = Vec::new();
        while !self.tokens.eof() && self.tokens.peek_kind() != Some(TokenKind::CloseParen) {
            href.push(self.parse_text_based()?);
        }
        self.tokens.next();

        Ok(Inline::Hyperlink(Hyperlink {
            text: Box::new(Inline::join(alt)),
            url: Inline::join(href).source(),
        }))
    }

    /// `$name`: resolved by name against the registry. An unknown name
    /// stays in the output as literal text with its `$` prefix restored.
    fn parse_dollar(&mut self) -> Inline {
        let value = self.tokens.next().map(|token| token.value).unwrap_or_default();
        let name = value.strip_prefix('$').unwrap_or(&value);
        match shortcuts::by_name(name) {
            Some(shortcut) => Inline::Text(Text::new(shortcut.value)),
            None => Inline::Text(Text::new(format!("${}", value))),
        }
    }

    /// `&name`: resolved by entity alias (`&copy` looks up `&copy;`). An
    /// unknown entity stays in the output as its literal text.
    fn parse_and(&mut self) -> Inline {
        let value = self.tokens.next().map(|token| token.value).unwrap_or_default();
        let entity = format!("{};", value);
        match shortcuts::by_entity(&entity) {
            Some(shortcut) => Inline::Text(Text::new(shortcut.value)),
            None => Inline::Text(Text::new(value)),
        }
    }

    /// `$$name{a}{b}...$$`: argument groups while an `{` follows; a bare
    /// closing `$$` token is consumed when present.
    fn parse_formula(&mut self) -> Result<Inline, ParseError> {
        let value = self.tokens.next().map(|token| token.value).unwrap_or_default();
        let name = value.strip_prefix("$$").unwrap_or(&value).to_string();

        let mut args = Vec::new();
        while self.tokens.peek_kind() == Some(TokenKind::OpenBrace) {
            args.push(self.parse_argument()?);
        }

        if self.tokens.peek_kind() == Some(TokenKind::DoubleDollar) {
            self.tokens.next();
        }

        Ok(Inline::Formula(Formula { name, args }))
    }

    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        self.tokens.next();
        let mut children = Vec::new();
        while !self.tokens.eof() && self.tokens.peek_kind() != Some(TokenKind::CloseBrace) {
            children.push(self.parse_text_based()?);
        }
        self.tokens.next();
        Ok(Argument {
            text: Box::new(Inline::join(children)),
        })
    }

    /// The fall-through default: the peeked token, whatever its kind,
    /// starts a text run, and adjacent passthrough/whitespace tokens merge
    /// into the same `Text` node.
    fn parse_text_run(&mut self) -> Inline {
        let mut value = self.tokens.next().map(|token| token.value).unwrap_or_default();
        while matches!(
            self.tokens.peek_kind(),
            Some(TokenKind::Passthrough) | Some(TokenKind::Whitespace)
        ) {
            if let Some(token) = self.tokens.next() {
                value.push_str(&token.value);
            }
        }
        Inline::Text(Text::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marq::characters::Position;
    use crate::marq::testing::{mk_stream, tok, tok_at};
    use crate::marq::token::Token;

    fn parse_tokens(tokens: Vec<Token>) -> Document {
        Parser::new(TokenStream::new(tokens))
            .parse()
            .expect("parse failed")
    }

    fn first_inline(document: &Document) -> &Inline {
        match &document.children[0] {
            Block::Paragraph(paragraph) => &paragraph.text,
            Block::Heading(heading) => &heading.text,
        }
    }

    #[test]
    fn empty_stream_parses_to_an_empty_document() {
        let document = parse_tokens(Vec::new());
        assert!(document.children.is_empty());
    }

    #[test]
    fn adjacent_passthrough_tokens_merge_into_one_text() {
        let document = parse_tokens(vec![
            tok(TokenKind::Passthrough, "hello"),
            tok(TokenKind::Passthrough, "world"),
        ]);
        assert_eq!(
            first_inline(&document),
            &Inline::Text(Text::new("helloworld"))
        );
    }

    #[test]
    fn whitespace_merges_into_the_preceding_text_run() {
        let document = parse_tokens(vec![
            tok(TokenKind::Identifier, "Hello"),
            tok(TokenKind::Whitespace, " "),
            tok(TokenKind::Identifier, "world"),
        ]);
        match first_inline(&document) {
            Inline::Join(join) => {
                assert_eq!(join.text[0], Inline::Text(Text::new("Hello ")));
                assert_eq!(join.text[1], Inline::Text(Text::new("world")));
            }
            other => panic!("expected a join, got {:?}", other),
        }
    }

    #[test]
    fn bold_closes_on_kind_not_identity() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::Exponent, "**"),
            (TokenKind::Passthrough, "hello"),
            (TokenKind::Exponent, "**"),
        ]));
        let document = parser.parse().expect("parse failed");
        match first_inline(&document) {
            Inline::Bold(bold) => assert_eq!(*bold.text, Inline::Text(Text::new("hello"))),
            other => panic!("expected bold, got {:?}", other),
        }
    }

    #[test]
    fn empty_bold_normalizes_to_empty_text() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::Exponent, "**"),
            (TokenKind::Exponent, "**"),
        ]));
        let document = parser.parse().expect("parse failed");
        match first_inline(&document) {
            Inline::Bold(bold) => assert_eq!(*bold.text, Inline::Text(Text::new(""))),
            other => panic!("expected bold, got {:?}", other),
        }
    }

    #[test]
    fn unterminated_bold_keeps_collected_content() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::Exponent, "**"),
            (TokenKind::Passthrough, "hello"),
        ]));
        let document = parser.parse().expect("parse failed");
        match first_inline(&document) {
            Inline::Bold(bold) => assert_eq!(*bold.text, Inline::Text(Text::new("hello"))),
            other => panic!("expected bold, got {:?}", other),
        }
    }

    #[test]
    fn nested_delimiters_preserve_order() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::Exponent, "**"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Passthrough, "hello"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Exponent, "**"),
        ]));
        let document = parser.parse().expect("parse failed");
        match first_inline(&document) {
            Inline::Bold(bold) => match bold.text.as_ref() {
                Inline::Italic(italic) => {
                    assert_eq!(*italic.text, Inline::Text(Text::new("hello")));
                }
                other => panic!("expected italic inside bold, got {:?}", other),
            },
            other => panic!("expected bold, got {:?}", other),
        }
    }

    #[test]
    fn same_kind_reappearance_always_closes() {
        // **a**b** -- the second `**` closes the first; the rest is text.
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::Exponent, "**"),
            (TokenKind::Passthrough, "a"),
            (TokenKind::Exponent, "**"),
            (TokenKind::Passthrough, "b"),
            (TokenKind::Exponent, "**"),
        ]));
        let document = parser.parse().expect("parse failed");
        match first_inline(&document) {
            Inline::Join(join) => {
                assert_eq!(join.text.len(), 3);
                match &join.text[0] {
                    Inline::Bold(bold) => assert_eq!(*bold.text, Inline::Text(Text::new("a"))),
                    other => panic!("expected bold first, got {:?}", other),
                }
                assert_eq!(join.text[1], Inline::Text(Text::new("b")));
            }
            other => panic!("expected a join, got {:?}", other),
        }
    }

    #[test]
    fn dollar_shortcut_resolves() {
        let document = parse_tokens(vec![tok(TokenKind::Dollar, "$copy")]);
        assert_eq!(first_inline(&document), &Inline::Text(Text::new("\u{00A9}")));
    }

    #[test]
    fn unknown_dollar_shortcut_passes_through_prefixed() {
        let document = parse_tokens(vec![tok(TokenKind::Dollar, "$unknownxyz")]);
        assert_eq!(
            first_inline(&document),
            &Inline::Text(Text::new("$$unknownxyz"))
        );
    }

    #[test]
    fn and_shortcut_resolves_by_entity() {
        let document = parse_tokens(vec![tok(TokenKind::And, "&copy")]);
        assert_eq!(first_inline(&document), &Inline::Text(Text::new("\u{00A9}")));

        let document = parse_tokens(vec![tok(TokenKind::And, "&nosuch")]);
        assert_eq!(first_inline(&document), &Inline::Text(Text::new("&nosuch")));
    }

    #[test]
    fn heading_takes_its_level_from_the_marker() {
        let document = parse_tokens(vec![
            tok(TokenKind::Heading, "###"),
            tok(TokenKind::Whitespace, " "),
            tok(TokenKind::Identifier, "Title"),
        ]);
        match &document.children[0] {
            Block::Heading(heading) => {
                assert_eq!(heading.level, 3);
                assert_eq!(heading.text, Inline::Text(Text::new("Title")));
            }
            other => panic!("expected a heading, got {:?}", other),
        }
    }

    #[test]
    fn heading_stops_at_the_newline() {
        let document = parse_tokens(vec![
            tok(TokenKind::Heading, "#"),
            tok(TokenKind::Passthrough, "hello"),
            tok(TokenKind::Newline, "\n"),
            tok(TokenKind::Passthrough, "after"),
        ]);
        assert_eq!(document.children.len(), 2);
        match &document.children[1] {
            Block::Paragraph(paragraph) => {
                assert_eq!(paragraph.text, Inline::Text(Text::new("after")));
            }
            other => panic!("expected a paragraph, got {:?}", other),
        }
    }

    #[test]
    fn hyperlink_parses_alt_and_flattened_url() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::OpenBracket, "["),
            (TokenKind::Identifier, "hello"),
            (TokenKind::CloseBracket, "]"),
            (TokenKind::OpenParen, "("),
            (TokenKind::Identifier, "world"),
            (TokenKind::CloseParen, ")"),
        ]));
        let document = parser.parse().expect("parse failed");
        match first_inline(&document) {
            Inline::Hyperlink(link) => {
                assert_eq!(*link.text, Inline::Text(Text::new("hello")));
                assert_eq!(link.url, "world");
            }
            other => panic!("expected a hyperlink, got {:?}", other),
        }
    }

    #[test]
    fn hyperlink_url_keeps_expanded_shortcuts() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::OpenBracket, "["),
            (TokenKind::Identifier, "x"),
            (TokenKind::CloseBracket, "]"),
            (TokenKind::OpenParen, "("),
            (TokenKind::Identifier, "a"),
            (TokenKind::Dollar, "$pi"),
            (TokenKind::CloseParen, ")"),
        ]));
        let document = parser.parse().expect("parse failed");
        match first_inline(&document) {
            Inline::Hyperlink(link) => assert_eq!(link.url, "a\u{03C0}"),
            other => panic!("expected a hyperlink, got {:?}", other),
        }
    }

    #[test]
    fn hyperlink_without_paren_is_a_parse_error() {
        let mut parser = Parser::new(TokenStream::new(vec![
            tok_at(TokenKind::OpenBracket, "[", 0, 1, 1),
            tok_at(TokenKind::Identifier, "hello", 1, 1, 2),
            tok_at(TokenKind::CloseBracket, "]", 6, 1, 7),
            tok_at(TokenKind::Identifier, "world", 7, 1, 8),
        ]));
        match parser.parse() {
            // The error points at the `]` the `(` should have followed.
            Err(ParseError::ExpectedOpenParen { position }) => {
                assert_eq!(position, Position { index: 6, line: 1, col: 7 });
            }
            other => panic!("expected ExpectedOpenParen, got {:?}", other),
        }
    }

    #[test]
    fn formula_collects_brace_arguments() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::DoubleDollar, "$$frac"),
            (TokenKind::OpenBrace, "{"),
            (TokenKind::Integer, "1"),
            (TokenKind::CloseBrace, "}"),
            (TokenKind::OpenBrace, "{"),
            (TokenKind::Integer, "2"),
            (TokenKind::CloseBrace, "}"),
            (TokenKind::DoubleDollar, "$$"),
        ]));
        let document = parser.parse().expect("parse failed");
        match first_inline(&document) {
            Inline::Formula(formula) => {
                assert_eq!(formula.name, "frac");
                assert_eq!(formula.args.len(), 2);
                assert_eq!(*formula.args[0].text, Inline::Text(Text::new("1")));
                assert_eq!(*formula.args[1].text, Inline::Text(Text::new("2")));
            }
            other => panic!("expected a formula, got {:?}", other),
        }
    }

    #[test]
    fn formula_without_closer_keeps_its_arguments() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::DoubleDollar, "$$sqrt"),
            (TokenKind::OpenBrace, "{"),
            (TokenKind::Integer, "2"),
            (TokenKind::CloseBrace, "}"),
        ]));
        let document = parser.parse().expect("parse failed");
        match first_inline(&document) {
            Inline::Formula(formula) => {
                assert_eq!(formula.name, "sqrt");
                assert_eq!(formula.args.len(), 1);
            }
            other => panic!("expected a formula, got {:?}", other),
        }
    }
}
