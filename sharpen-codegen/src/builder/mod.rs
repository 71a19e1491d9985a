//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Indent-aware line writer
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`], [`LineEnding`] - Whitespace configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::{Indent, LineEnding};
pub use renderable::{CodeFragment, Renderable, last_line_of};
