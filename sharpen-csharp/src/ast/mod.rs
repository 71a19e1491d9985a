//! The node model: immutable values produced by the builders.
//!
//! Nodes are plain data. They are rendered through
//! [`Renderable`](sharpen_codegen::Renderable) or `Display`, and serialize
//! with serde so a generated tree can be inspected or snapshotted.

mod attrs;
mod decls;
mod generics;
mod members;

pub use attrs::{Attribute, AttributeArgument};
pub use decls::{CompilationUnit, Namespace, NamespaceLayout, TypeDeclaration, TypeKind};
pub use generics::{Constraint, ConstraintClause, TypeParameter};
pub(crate) use members::statement_lines;
pub use members::{
    Accessor, AccessorKind, Body, Constructor, ConstructorInitializer, Field, Member, Method,
    NOT_IMPLEMENTED, Parameter, Property,
};
