//! Generic type parameters and their constraint clauses.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeParameter {
    pub name: String,
}

/// A single constraint inside a `where` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Constraint {
    /// `class`
    Class,
    /// `struct`
    Struct,
    /// `new()`
    New,
    /// A named base type or interface.
    Type(String),
}

/// `where T : ...` for one type parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintClause {
    pub type_parameter: String,
    /// Constraints in the order they were added.
    pub constraints: Vec<Constraint>,
}

impl ConstraintClause {
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
