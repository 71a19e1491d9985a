//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! This module provides abstractions that allow AST nodes to be composed
//! and rendered without direct coupling to CodeBuilder.

/// Represents a fragment of generated code.
///
/// CodeFragments form an intermediate representation between AST nodes
/// and the final string output, enabling composition and transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have a line ending appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, indented body fragments, and closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a brace block with both braces on their own lines.
    ///
    /// ```
    /// use sharpen_codegen::builder::{CodeBuilder, CodeFragment};
    ///
    /// let mut builder = CodeBuilder::default();
    /// builder.apply_fragment(CodeFragment::braced(vec![CodeFragment::line("x();")]));
    /// assert_eq!(builder.build(), "{\n    x();\n}\n");
    /// ```
    pub fn braced(body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: "{".to_string(),
            body,
            close: "}".to_string(),
        }
    }

    /// The text of the last non-blank line this fragment produces.
    pub fn last_line(&self) -> Option<&str> {
        match self {
            Self::Line(s) => Some(s),
            Self::Blank => None,
            Self::Block { close, .. } => Some(close),
        }
    }
}

/// The last non-blank line produced by a run of fragments.
pub fn last_line_of(fragments: &[CodeFragment]) -> Option<&str> {
    fragments.iter().rev().find_map(CodeFragment::last_line)
}

/// Trait for types that can be rendered to code fragments.
///
/// Implement this trait for AST nodes to enable them to be rendered
/// through CodeBuilder without direct coupling.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
        assert_eq!(
            CodeFragment::braced(Vec::new()),
            CodeFragment::Block {
                header: "{".to_string(),
                body: Vec::new(),
                close: "}".to_string(),
            }
        );
    }

    #[test]
    fn test_last_line() {
        let method = vec![
            CodeFragment::line("void Run()"),
            CodeFragment::braced(vec![CodeFragment::line("Go();")]),
        ];
        assert_eq!(last_line_of(&method), Some("}"));

        let field = CodeFragment::line("private int x;");
        assert_eq!(field.last_line(), Some("private int x;"));

        let trailing_blank = vec![CodeFragment::line("a;"), CodeFragment::Blank];
        assert_eq!(last_line_of(&trailing_blank), Some("a;"));
        assert_eq!(CodeFragment::Blank.last_line(), None);
        assert_eq!(last_line_of(&[]), None);
    }
}
