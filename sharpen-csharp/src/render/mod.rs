//! Canonical C# layout for the node model.
//!
//! Every node implements [`Renderable`], producing [`CodeFragment`]s that a
//! [`CodeBuilder`] lays out under a [`RenderConfig`]. The default
//! configuration (four spaces, `\n`) backs each node's `Display`.

mod decls;
mod inline;
mod members;

use std::fmt;

use sharpen_codegen::builder::last_line_of;
use sharpen_codegen::{CodeBuilder, CodeFragment, RenderConfig, Renderable};

use crate::ast::{
    Accessor, Attribute, CompilationUnit, Constructor, Field, Member, Method, Namespace, Property,
    TypeDeclaration,
};

/// Text rendering for anything that produces fragments.
pub trait Render: Renderable {
    /// Render under `config`, without a trailing line ending.
    fn render_with(&self, config: &RenderConfig) -> String {
        let _span = tracing::trace_span!(
            "render",
            indent = ?config.indent,
            line_ending = ?config.line_ending
        )
        .entered();

        let mut builder = CodeBuilder::from_config(config);
        builder.emit(&self);
        builder.finish()
    }
}

impl<T: Renderable + ?Sized> Render for T {}

macro_rules! display_via_render {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.render_with(&RenderConfig::default()))
                }
            }
        )*
    };
}

display_via_render!(
    CompilationUnit,
    Namespace,
    TypeDeclaration,
    Member,
    Constructor,
    Field,
    Property,
    Accessor,
    Method,
);

/// Concatenate items, putting a blank line after any item that closes a brace.
pub(crate) fn separated<I>(items: I) -> Vec<CodeFragment>
where
    I: IntoIterator<Item = Vec<CodeFragment>>,
{
    let mut out = Vec::new();
    for item in items {
        if last_line_of(&out).is_some_and(|line| line.ends_with('}')) {
            out.push(CodeFragment::blank());
        }
        out.extend(item);
    }
    out
}

/// Modifiers followed by a single space, or nothing.
pub(crate) fn modifier_prefix(modifiers: &[String]) -> String {
    modifiers.iter().map(|m| format!("{m} ")).collect()
}

/// `[A, B(x)]` on its own line, when there is anything to list.
pub(crate) fn attribute_list(attributes: &[Attribute]) -> Option<CodeFragment> {
    if attributes.is_empty() {
        return None;
    }
    let list = attributes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Some(CodeFragment::line(format!("[{list}]")))
}

pub(crate) fn using_lines(usings: &[String]) -> impl Iterator<Item = CodeFragment> + '_ {
    usings
        .iter()
        .map(|using| CodeFragment::line(format!("using {using};")))
}

/// Statement lines inside `{` and `}`.
pub(crate) fn block(lines: &[String]) -> CodeFragment {
    CodeFragment::braced(lines.iter().map(CodeFragment::line).collect())
}
