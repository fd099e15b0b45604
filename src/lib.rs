//! # marq
//!
//! A compiler for the marq markup format.
//!
//! marq is a lightweight markup syntax (headings, emphasis, hyperlinks,
//! formula shorthand, symbol shortcuts) compiled into LaTeX. The whole
//! compiler lives under the [`marq`] module: character stream, lexer,
//! token stream, recursive-descent parser, document tree, and the
//! generators that walk the tree to emit target text.
//!
//! The rendering cache, the HTTP render service, and the formula-to-image
//! backend are separate services; this crate's contract with them ends at
//! the generated LaTeX string and the canonical AST serialization.

pub mod marq;
