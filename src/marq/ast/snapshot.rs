//! Canonical structural serialization of the AST.
//!
//! Every node serializes to `{"type": "<kind>", ...fields}`. The shape is
//! the interchange form consumed by external tooling (the formula render
//! service, test fixtures), so field names and nesting are written out by
//! hand here rather than derived.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::nodes::{
    Argument, Block, Bold, Document, Formula, Heading, Hyperlink, Inline, Italic, Join, Paragraph,
    Strikethrough, Text, Underline,
};

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Document", 2)?;
        state.serialize_field("type", "document")?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Block::Heading(node) => node.serialize(serializer),
            Block::Paragraph(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for Heading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Heading", 3)?;
        state.serialize_field("type", "heading")?;
        state.serialize_field("level", &self.level)?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Paragraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Paragraph", 2)?;
        state.serialize_field("type", "paragraph")?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Inline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Inline::Text(node) => node.serialize(serializer),
            Inline::Bold(node) => node.serialize(serializer),
            Inline::Italic(node) => node.serialize(serializer),
            Inline::Underline(node) => node.serialize(serializer),
            Inline::Strikethrough(node) => node.serialize(serializer),
            Inline::Join(node) => node.serialize(serializer),
            Inline::Hyperlink(node) => node.serialize(serializer),
            Inline::Argument(node) => node.serialize(serializer),
            Inline::Formula(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Text", 2)?;
        state.serialize_field("type", "text")?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Bold {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Bold", 2)?;
        state.serialize_field("type", "bold")?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Italic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Italic", 2)?;
        state.serialize_field("type", "italic")?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Underline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Underline", 2)?;
        state.serialize_field("type", "underline")?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Strikethrough {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Strikethrough", 2)?;
        state.serialize_field("type", "strikethrough")?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Join {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Join", 2)?;
        state.serialize_field("type", "join")?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Hyperlink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Hyperlink", 3)?;
        state.serialize_field("type", "hyperlink")?;
        state.serialize_field("text", &self.text)?;
        state.serialize_field("url", &self.url)?;
        state.end()
    }
}

impl Serialize for Argument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Argument", 2)?;
        state.serialize_field("type", "argument")?;
        state.serialize_field("text", &self.text)?;
        state.end()
    }
}

impl Serialize for Formula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Formula", 3)?;
        state.serialize_field("type", "formula")?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("args", &self.args)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_snapshot_shape() {
        let document = Document::new(vec![Block::Heading(Heading {
            level: 1,
            text: Inline::Text(Text::new("hello")),
        })]);
        let value = serde_json::to_value(&document).expect("serialize failed");
        assert_eq!(
            value,
            json!({
                "type": "document",
                "children": [
                    {
                        "type": "heading",
                        "level": 1,
                        "text": { "type": "text", "text": "hello" },
                    },
                ],
            })
        );
    }

    #[test]
    fn nested_inline_snapshot_shape() {
        let paragraph = Paragraph {
            text: Inline::Join(Join {
                text: vec![
                    Inline::Text(Text::new("Hello ")),
                    Inline::Bold(Bold {
                        text: Box::new(Inline::Text(Text::new("world"))),
                    }),
                ],
            }),
        };
        let value = serde_json::to_value(&paragraph).expect("serialize failed");
        assert_eq!(
            value,
            json!({
                "type": "paragraph",
                "text": {
                    "type": "join",
                    "text": [
                        { "type": "text", "text": "Hello " },
                        { "type": "bold", "text": { "type": "text", "text": "world" } },
                    ],
                },
            })
        );
    }

    #[test]
    fn hyperlink_and_formula_snapshot_shapes() {
        let link = Inline::Hyperlink(Hyperlink {
            text: Box::new(Inline::Text(Text::new("hello"))),
            url: "world".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&link).expect("serialize failed"),
            json!({
                "type": "hyperlink",
                "text": { "type": "text", "text": "hello" },
                "url": "world",
            })
        );

        let formula = Inline::Formula(Formula {
            name: "sqrt".to_string(),
            args: vec![Argument {
                text: Box::new(Inline::Text(Text::new("2"))),
            }],
        });
        assert_eq!(
            serde_json::to_value(&formula).expect("serialize failed"),
            json!({
                "type": "formula",
                "name": "sqrt",
                "args": [
                    { "type": "argument", "text": { "type": "text", "text": "2" } },
                ],
            })
        );
    }
}
