//! Generator.
//!
//! Walks a document tree and emits target-format text. The trait carries
//! one required method per node kind; the provided dispatchers match
//! exhaustively over the node enums, so adding a node kind forces every
//! target to say what it emits for it.
//!
//! Generation is a pure function of the tree: no generator mutates the
//! document, so one parsed document can be handed to any number of
//! generators, in any order.

use super::ast::nodes::{
    Argument, Block, Bold, Document, Formula, Heading, Hyperlink, Inline, Italic, Join, Paragraph,
    Strikethrough, Text, Underline,
};
use super::error::GenerateError;

pub trait Generator {
    type Output;

    /// Entry point: generates output for a whole document.
    fn generate(&self, document: &Document) -> Result<Self::Output, GenerateError> {
        self.generate_document(document)
    }

    /// Dispatches a block node to its emission method.
    fn generate_block(&self, block: &Block) -> Result<Self::Output, GenerateError> {
        match block {
            Block::Heading(node) => self.generate_heading(node),
            Block::Paragraph(node) => self.generate_paragraph(node),
        }
    }

    /// Dispatches an inline node to its emission method.
    fn generate_inline(&self, inline: &Inline) -> Result<Self::Output, GenerateError> {
        match inline {
            Inline::Text(node) => self.generate_text(node),
            Inline::Bold(node) => self.generate_bold(node),
            Inline::Italic(node) => self.generate_italic(node),
            Inline::Underline(node) => self.generate_underline(node),
            Inline::Strikethrough(node) => self.generate_strikethrough(node),
            Inline::Join(node) => self.generate_join(node),
            Inline::Hyperlink(node) => self.generate_hyperlink(node),
            Inline::Argument(node) => self.generate_argument(node),
            Inline::Formula(node) => self.generate_formula(node),
        }
    }

    fn generate_document(&self, node: &Document) -> Result<Self::Output, GenerateError>;
    fn generate_heading(&self, node: &Heading) -> Result<Self::Output, GenerateError>;
    fn generate_paragraph(&self, node: &Paragraph) -> Result<Self::Output, GenerateError>;
    fn generate_text(&self, node: &Text) -> Result<Self::Output, GenerateError>;
    fn generate_bold(&self, node: &Bold) -> Result<Self::Output, GenerateError>;
    fn generate_italic(&self, node: &Italic) -> Result<Self::Output, GenerateError>;
    fn generate_underline(&self, node: &Underline) -> Result<Self::Output, GenerateError>;
    fn generate_strikethrough(&self, node: &Strikethrough) -> Result<Self::Output, GenerateError>;
    fn generate_join(&self, node: &Join) -> Result<Self::Output, GenerateError>;
    fn generate_hyperlink(&self, node: &Hyperlink) -> Result<Self::Output, GenerateError>;
    fn generate_argument(&self, node: &Argument) -> Result<Self::Output, GenerateError>;
    fn generate_formula(&self, node: &Formula) -> Result<Self::Output, GenerateError>;
}
