//! Type members: constructors, fields, properties, accessors, and methods.

use serde::Serialize;

use super::{Attribute, ConstraintClause, TypeParameter};

/// Expression used by methods that were never given a body.
pub const NOT_IMPLEMENTED: &str = "throw new NotImplementedException()";

/// The body of a method or accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Body {
    /// No body at all: the declaration ends with `;`.
    Semicolon,
    /// A brace block holding one statement line per entry.
    Block(Vec<String>),
    /// An expression body: `=> expression;`.
    Expression(String),
}

impl Body {
    /// Split caller text into block lines, dropping blank ones.
    pub fn block(text: &str) -> Self {
        Self::Block(statement_lines(text))
    }

    /// Normalize caller text into a single-line arrow expression.
    pub fn expression(text: &str) -> Self {
        let joined = statement_lines(text).join(" ");
        let expression = joined.trim_end_matches(';').trim_end();
        Self::Expression(expression.to_string())
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }
}

/// Split text on line breaks, trim every line, and drop the blank ones.
pub(crate) fn statement_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
    /// Default value expression, written as `= default`.
    pub default: Option<String>,
    /// Extension-method receiver, written with a leading `this`.
    pub is_this: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub ty: String,
    pub name: String,
    pub modifiers: Vec<String>,
    pub initializer: Option<String>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessorKind {
    Get,
    Set,
    Init,
}

impl AccessorKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Init => "init",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub modifiers: Vec<String>,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub ty: String,
    pub name: String,
    pub modifiers: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub accessors: Vec<Accessor>,
}

impl Property {
    /// Whether every accessor fits on the declaration line.
    pub fn is_single_line(&self) -> bool {
        !self.accessors.iter().any(|a| a.body.is_block())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    pub return_type: String,
    pub name: String,
    pub modifiers: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub type_parameters: Vec<TypeParameter>,
    pub constraints: Vec<ConstraintClause>,
    pub parameters: Vec<Parameter>,
    pub body: Body,
}

/// `: base(arguments)` on a constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorInitializer {
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constructor {
    /// Name of the owning type.
    pub name: String,
    pub modifiers: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub parameters: Vec<Parameter>,
    pub initializer: Option<ConstructorInitializer>,
    /// Statement lines; empty renders as an empty block.
    pub body: Vec<String>,
}

/// Any member of a class or interface body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Member {
    Constructor(Constructor),
    Field(Field),
    Property(Property),
    Method(Method),
}
