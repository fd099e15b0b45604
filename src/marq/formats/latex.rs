//! LaTeX output format.
//!
//! Text passes through verbatim: shortcut substitution already happened in
//! the parser, and escaping of LaTeX metacharacters is deliberately not
//! this layer's job. Formulas dispatch on their registered name against a
//! closed set of operators with strict argument counts; there is no
//! fallback rendering for an unknown operator.

use crate::marq::ast::nodes::{
    Argument, Bold, Document, Formula, Heading, Hyperlink, Italic, Join, Paragraph, Strikethrough,
    Text, Underline,
};
use crate::marq::error::GenerateError;
use crate::marq::generating::Generator;

/// Generates LaTeX source from a document tree.
#[derive(Debug, Default)]
pub struct LatexGenerator;

impl LatexGenerator {
    pub fn new() -> Self {
        Self
    }

    fn sqrt(&self, node: &Formula) -> Result<String, GenerateError> {
        match node.args.as_slice() {
            [radicand] => Ok(format!("\\sqrt{{{}}}", self.generate_argument(radicand)?)),
            args => Err(GenerateError::FormulaArity {
                name: node.name.clone(),
                expected: "exactly 1",
                found: args.len(),
            }),
        }
    }

    fn frac(&self, node: &Formula) -> Result<String, GenerateError> {
        match node.args.as_slice() {
            [numerator, denominator] => Ok(format!(
                "\\frac{{{}}}{{{}}}",
                self.generate_argument(numerator)?,
                self.generate_argument(denominator)?
            )),
            args => Err(GenerateError::FormulaArity {
                name: node.name.clone(),
                expected: "exactly 2",
                found: args.len(),
            }),
        }
    }

    fn sum(&self, node: &Formula) -> Result<String, GenerateError> {
        match node.args.as_slice() {
            [lower] => Ok(format!("\\sum_{{{}}}", self.generate_argument(lower)?)),
            [lower, upper] => Ok(format!(
                "\\sum_{{{}}}^{{{}}}",
                self.generate_argument(lower)?,
                self.generate_argument(upper)?
            )),
            [lower, upper, body] => Ok(format!(
                "\\sum_{{{}}}^{{{}}}{{{}}}",
                self.generate_argument(lower)?,
                self.generate_argument(upper)?,
                self.generate_argument(body)?
            )),
            args => Err(GenerateError::FormulaArity {
                name: node.name.clone(),
                expected: "1 to 3",
                found: args.len(),
            }),
        }
    }
}

impl Generator for LatexGenerator {
    type Output = String;

    fn generate_document(&self, node: &Document) -> Result<String, GenerateError> {
        let mut output = String::new();
        for child in &node.children {
            output.push_str(&self.generate_block(child)?);
        }
        Ok(output)
    }

    fn generate_heading(&self, node: &Heading) -> Result<String, GenerateError> {
        let depth = "sub".repeat(node.level.saturating_sub(1));
        Ok(format!(
            "\\{}section{{{}}}",
            depth,
            self.generate_inline(&node.text)?
        ))
    }

    fn generate_paragraph(&self, node: &Paragraph) -> Result<String, GenerateError> {
        Ok(format!("{}\n\n", self.generate_inline(&node.text)?))
    }

    fn generate_text(&self, node: &Text) -> Result<String, GenerateError> {
        Ok(node.text.clone())
    }

    fn generate_bold(&self, node: &Bold) -> Result<String, GenerateError> {
        Ok(format!("\\textbf{{{}}}", self.generate_inline(&node.text)?))
    }

    fn generate_italic(&self, node: &Italic) -> Result<String, GenerateError> {
        Ok(format!("\\textit{{{}}}", self.generate_inline(&node.text)?))
    }

    fn generate_underline(&self, node: &Underline) -> Result<String, GenerateError> {
        Ok(format!("\\underline{{{}}}", self.generate_inline(&node.text)?))
    }

    fn generate_strikethrough(&self, node: &Strikethrough) -> Result<String, GenerateError> {
        Ok(format!("\\sout{{{}}}", self.generate_inline(&node.text)?))
    }

    fn generate_join(&self, node: &Join) -> Result<String, GenerateError> {
        let mut output = String::new();
        for part in &node.text {
            output.push_str(&self.generate_inline(part)?);
        }
        Ok(output)
    }

    fn generate_hyperlink(&self, node: &Hyperlink) -> Result<String, GenerateError> {
        Ok(format!(
            "\\href{{{}}}{{{}}}",
            node.url,
            self.generate_inline(&node.text)?
        ))
    }

    fn generate_argument(&self, node: &Argument) -> Result<String, GenerateError> {
        self.generate_inline(&node.text)
    }

    fn generate_formula(&self, node: &Formula) -> Result<String, GenerateError> {
        match node.name.as_str() {
            "frac" => self.frac(node),
            "sqrt" => self.sqrt(node),
            "sum" => self.sum(node),
            _ => Err(GenerateError::UnknownFormula {
                name: node.name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marq::ast::nodes::{Block, Inline};

    fn text(value: &str) -> Inline {
        Inline::Text(Text::new(value))
    }

    fn argument(value: &str) -> Argument {
        Argument {
            text: Box::new(text(value)),
        }
    }

    #[test]
    fn empty_document_generates_nothing() {
        let generator = LatexGenerator::new();
        let output = generator.generate(&Document::new(Vec::new())).expect("generate failed");
        assert_eq!(output, "");
    }

    #[test]
    fn wrappers_emit_their_commands() {
        let generator = LatexGenerator::new();
        let inner = text("Hello World!");

        let bold = generator
            .generate_bold(&Bold { text: Box::new(inner.clone()) })
            .expect("generate failed");
        assert_eq!(bold, "\\textbf{Hello World!}");

        let italic = generator
            .generate_italic(&Italic { text: Box::new(inner.clone()) })
            .expect("generate failed");
        assert_eq!(italic, "\\textit{Hello World!}");

        let underline = generator
            .generate_underline(&Underline { text: Box::new(inner.clone()) })
            .expect("generate failed");
        assert_eq!(underline, "\\underline{Hello World!}");

        let strikethrough = generator
            .generate_strikethrough(&Strikethrough { text: Box::new(inner) })
            .expect("generate failed");
        assert_eq!(strikethrough, "\\sout{Hello World!}");
    }

    #[test]
    fn join_concatenates_without_separators() {
        let generator = LatexGenerator::new();
        let join = Join {
            text: vec![text("Hello "), text("World!")],
        };
        assert_eq!(generator.generate_join(&join).expect("generate failed"), "Hello World!");
    }

    #[test]
    fn hyperlink_combines_url_and_text() {
        let generator = LatexGenerator::new();
        let link = Hyperlink {
            text: Box::new(text("Hello World!")),
            url: "https://example.com".to_string(),
        };
        assert_eq!(
            generator.generate_hyperlink(&link).expect("generate failed"),
            "\\href{https://example.com}{Hello World!}"
        );
    }

    #[test]
    fn paragraph_ends_with_two_newlines() {
        let generator = LatexGenerator::new();
        let paragraph = Paragraph { text: text("Hello World!") };
        assert_eq!(
            generator.generate_paragraph(&paragraph).expect("generate failed"),
            "Hello World!\n\n"
        );
    }

    #[test]
    fn heading_levels_prepend_sub() {
        let generator = LatexGenerator::new();
        for (level, expected) in [
            (1, "\\section{Hello World!}"),
            (2, "\\subsection{Hello World!}"),
            (3, "\\subsubsection{Hello World!}"),
            (4, "\\subsubsubsection{Hello World!}"),
        ] {
            let heading = Heading { level, text: text("Hello World!") };
            assert_eq!(
                generator.generate_heading(&heading).expect("generate failed"),
                expected
            );
        }
    }

    #[test]
    fn known_formulas_render_by_arity() {
        let generator = LatexGenerator::new();

        let sqrt = Formula {
            name: "sqrt".to_string(),
            args: vec![argument("2")],
        };
        assert_eq!(generator.generate_formula(&sqrt).expect("generate failed"), "\\sqrt{2}");

        let frac = Formula {
            name: "frac".to_string(),
            args: vec![argument("1"), argument("2")],
        };
        assert_eq!(
            generator.generate_formula(&frac).expect("generate failed"),
            "\\frac{1}{2}"
        );

        let sum1 = Formula {
            name: "sum".to_string(),
            args: vec![argument("a")],
        };
        assert_eq!(generator.generate_formula(&sum1).expect("generate failed"), "\\sum_{a}");

        let sum2 = Formula {
            name: "sum".to_string(),
            args: vec![argument("a"), argument("b")],
        };
        assert_eq!(
            generator.generate_formula(&sum2).expect("generate failed"),
            "\\sum_{a}^{b}"
        );

        let sum3 = Formula {
            name: "sum".to_string(),
            args: vec![argument("a"), argument("b"), argument("c")],
        };
        assert_eq!(
            generator.generate_formula(&sum3).expect("generate failed"),
            "\\sum_{a}^{b}{c}"
        );
    }

    #[test]
    fn wrong_arity_is_a_generate_error() {
        let generator = LatexGenerator::new();
        let frac = Formula {
            name: "frac".to_string(),
            args: vec![argument("1")],
        };
        match generator.generate_formula(&frac) {
            Err(GenerateError::FormulaArity { name, found, .. }) => {
                assert_eq!(name, "frac");
                assert_eq!(found, 1);
            }
            other => panic!("expected an arity error, got {:?}", other),
        }

        let sum = Formula {
            name: "sum".to_string(),
            args: Vec::new(),
        };
        assert!(matches!(
            generator.generate_formula(&sum),
            Err(GenerateError::FormulaArity { .. })
        ));
    }

    #[test]
    fn unknown_formula_is_a_generate_error() {
        let generator = LatexGenerator::new();
        let formula = Formula {
            name: "integral".to_string(),
            args: Vec::new(),
        };
        match generator.generate_formula(&formula) {
            Err(GenerateError::UnknownFormula { name }) => assert_eq!(name, "integral"),
            other => panic!("expected UnknownFormula, got {:?}", other),
        }
    }

    #[test]
    fn document_concatenates_blocks_in_order() {
        let generator = LatexGenerator::new();
        let document = Document::new(vec![
            Block::Heading(Heading { level: 1, text: text("Title") }),
            Block::Paragraph(Paragraph { text: text("Body") }),
        ]);
        assert_eq!(
            generator.generate(&document).expect("generate failed"),
            "\\section{Title}Body\n\n"
        );
    }
}
