//! Nodes that always fit on one line.
//!
//! These write their text through `Display` and render as a single line.

use std::fmt;

use sharpen_codegen::{CodeFragment, Renderable};

use crate::ast::{
    Attribute, AttributeArgument, Constraint, ConstraintClause, ConstructorInitializer, Parameter,
    TypeParameter,
};

impl fmt::Display for AttributeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} = {}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.arguments.is_empty() {
            return f.write_str(&self.name);
        }
        write!(f, "{}({})", self.name, comma_separated(&self.arguments))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_this {
            f.write_str("this ")?;
        }
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.write_str("class"),
            Self::Struct => f.write_str("struct"),
            Self::New => f.write_str("new()"),
            Self::Type(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for ConstraintClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "where {} : {}",
            self.type_parameter,
            comma_separated(&self.constraints)
        )
    }
}

impl fmt::Display for ConstructorInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ": base({})", self.arguments.join(", "))
    }
}

macro_rules! single_line {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Renderable for $ty {
                fn to_fragments(&self) -> Vec<CodeFragment> {
                    vec![CodeFragment::line(self.to_string())]
                }
            }
        )*
    };
}

single_line!(
    Attribute,
    Parameter,
    TypeParameter,
    ConstraintClause,
    ConstructorInitializer,
);

pub(crate) fn comma_separated<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `<T, U>`, or nothing without type parameters.
pub(crate) fn type_parameter_list(type_parameters: &[TypeParameter]) -> String {
    if type_parameters.is_empty() {
        return String::new();
    }
    format!("<{}>", comma_separated(type_parameters))
}

/// ` where T : ...` for every clause that constrains something.
pub(crate) fn where_clauses(constraints: &[ConstraintClause]) -> String {
    constraints
        .iter()
        .filter(|clause| !clause.is_empty())
        .map(|clause| format!(" {clause}"))
        .collect()
}
