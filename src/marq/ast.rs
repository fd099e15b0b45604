//! The document tree shared between the parser and the generators.
//!
//! Nodes are plain owned values: each child is owned by exactly one parent
//! (`Box` / `Vec`), there are no back-references, and nothing mutates a
//! tree after the parser hands it over.

pub mod nodes;
pub mod snapshot;

pub use nodes::{
    Argument, Block, Bold, Document, Formula, Heading, Hyperlink, Inline, Italic, Join, Paragraph,
    Strikethrough, Text, Underline,
};
