//! Attribute nodes.

use serde::Serialize;

use crate::literal::AttributeValue;

/// An attribute applied to a declaration, e.g. `Obsolete("use Bar")`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub arguments: Vec<AttributeArgument>,
}

/// One argument of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeArgument {
    /// Property name for `Name = value` arguments, `None` when positional.
    pub name: Option<String>,
    pub value: AttributeValue,
}

impl AttributeArgument {
    pub fn positional(value: AttributeValue) -> Self {
        Self { name: None, value }
    }

    pub fn named(name: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}
