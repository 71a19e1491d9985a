//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, LineEnding, Renderable};
use crate::RenderConfig;

/// Indent-aware line writer that turns code fragments into text.
///
/// # Example
///
/// ```
/// use sharpen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder
///     .push_line("void Run()")
///     .push_line("{")
///     .push_indent()
///     .push_line("Go();")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "void Run()\n{\n    Go();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    unit: String,
    line_ending: LineEnding,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation and `\n` line endings.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            unit: indent.unit(),
            line_ending: LineEnding::Lf,
            buffer: String::new(),
        }
    }

    /// Create a CodeBuilder following a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            line_ending: config.line_ending,
            ..Self::new(config.indent)
        }
    }

    /// Add a line of code with current indentation.
    ///
    /// Text holding line breaks is written one line at a time, each with the
    /// current indentation and the configured line ending.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self.push_blank();
        }
        for line in s.lines() {
            if line.trim().is_empty() {
                self.push_blank();
                continue;
            }
            self.write_indent();
            self.buffer.push_str(line);
            self.buffer.push_str(self.line_ending.as_str());
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push_str(self.line_ending.as_str());
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                self.push_line(&close);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Consume the builder and return the generated code without its final line ending.
    pub fn finish(self) -> String {
        let mut buffer = self.buffer;
        if buffer.ends_with(self.line_ending.as_str()) {
            buffer.truncate(buffer.len() - self.line_ending.as_str().len());
        }
        buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
