//! AST node types.
//!
//! Two families of nodes: blocks (headings and paragraphs, the ordered
//! children of a document) and inlines (character-level content). Inline
//! content is always itself an inline node; raw strings appear only at
//! `Text` leaves, which is what lets bold/italic/hyperlink content nest
//! arbitrarily.

/// Root of a parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub children: Vec<Block>,
}

impl Document {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }
}

/// A top-level node: one per logical line-group.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
}

/// A heading; the level counts the `#` characters of its marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: usize,
    pub text: Inline,
}

/// The default block: a run of inline content up to a newline.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: Inline,
}

/// Character-level content.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(Text),
    Bold(Bold),
    Italic(Italic),
    Underline(Underline),
    Strikethrough(Strikethrough),
    Join(Join),
    Hyperlink(Hyperlink),
    Argument(Argument),
    Formula(Formula),
}

/// A plain text leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bold {
    pub text: Box<Inline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Italic {
    pub text: Box<Inline>,
}

/// Kept for generation; the parser has no production for it because its
/// `_` trigger is a word character and lexes into identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Underline {
    pub text: Box<Inline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Strikethrough {
    pub text: Box<Inline>,
}

/// Ordered concatenation of two or more inline parts, no separator.
/// Shorter child lists never become a `Join`; see [`Inline::join`].
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub text: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hyperlink {
    pub text: Box<Inline>,
    pub url: String,
}

/// One `{...}` group of a formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub text: Box<Inline>,
}

/// A named math operator with positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    pub name: String,
    pub args: Vec<Argument>,
}

impl Inline {
    /// Collapses a collected child list: zero children become empty text, a
    /// single child is used directly, and anything longer becomes a `Join`.
    pub fn join(mut parts: Vec<Inline>) -> Inline {
        match parts.len() {
            0 => Inline::Text(Text::new("")),
            1 => parts.remove(0),
            _ => Inline::Join(Join { text: parts }),
        }
    }

    /// The marked-up source form of this node, delimiters restored. Used to
    /// flatten a hyperlink's URL segment down to literal text: shortcut
    /// substitution survives (it already happened inside `Text` leaves)
    /// while formatting structure collapses back into its markers.
    pub fn source(&self) -> String {
        match self {
            Inline::Text(node) => node.text.clone(),
            Inline::Bold(node) => format!("**{}**", node.text.source()),
            Inline::Italic(node) => format!("*{}*", node.text.source()),
            Inline::Underline(node) => format!("_{}_", node.text.source()),
            Inline::Strikethrough(node) => format!("~{}~", node.text.source()),
            Inline::Join(node) => node.text.iter().map(Inline::source).collect(),
            Inline::Hyperlink(node) => format!("[{}]({})", node.text.source(), node.url),
            Inline::Argument(node) => format!("{{{}}}", node.text.source()),
            Inline::Formula(node) => {
                let args: String = node
                    .args
                    .iter()
                    .map(|arg| format!("{{{}}}", arg.text.source()))
                    .collect();
                format!("{}{}", node.name, args)
            }
        }
    }
}
