//! Fluent builders that assemble C# declarations and render them as
//! canonically formatted source.
//!
//! ```
//! use sharpen_csharp::{ClassBuilder, MethodBuilder, NamespaceBuilder};
//!
//! let method = MethodBuilder::new("string", "Greet")?
//!     .with_modifier("public")?
//!     .with_expression("\"hello\"")?;
//! let class = ClassBuilder::new("Greeter")?
//!     .with_modifier("public")?
//!     .with_method(&method);
//! let namespace = NamespaceBuilder::file_scoped("Demo")?.with_class(&class);
//!
//! assert_eq!(
//!     namespace.render(),
//!     "namespace Demo;\n\npublic class Greeter\n{\n    public string Greet() => \"hello\";\n}"
//! );
//! # Ok::<(), sharpen_csharp::Error>(())
//! ```

mod error;
mod render;

pub mod ast;
pub mod builders;
pub mod literal;

pub use ast::{
    Accessor, AccessorKind, Attribute, AttributeArgument, Body, CompilationUnit, Constraint,
    ConstraintClause, Constructor, ConstructorInitializer, Field, Member, Method, Namespace,
    NamespaceLayout, Parameter, Property, TypeDeclaration, TypeKind, TypeParameter,
};
pub use builders::{
    AccessorBuilder, AttributeBuilder, BaseConstructorBuilder, ClassBuilder,
    CompilationUnitBuilder, ConstructorBuilder, FieldBuilder, InterfaceBuilder, MethodBuilder,
    NamespaceBuilder, PropertyBuilder, TypeParameterBuilder, TypeParameterConstraintBuilder,
};
pub use error::{Error, InvalidReason, Result};
pub use literal::{AttributeValue, CSharpEnum};
pub use render::Render;
pub use sharpen_codegen::RenderConfig;
