//! Generic type parameters and `where` clauses.

use super::{Shared, impl_identity};
use crate::ast::{Constraint, ConstraintClause, TypeParameter};
use crate::error::{Result, required};

/// A generic type parameter such as `T`.
#[derive(Debug, Clone)]
pub struct TypeParameterBuilder {
    state: Shared<TypeParameter>,
}

impl_identity!(TypeParameterBuilder);

impl TypeParameterBuilder {
    pub fn new(name: &str) -> Result<Self> {
        let name = required(name, "name")?;
        Ok(Self {
            state: Shared::new(TypeParameter { name }),
        })
    }

    pub fn build(&self) -> TypeParameter {
        self.state.get().clone()
    }
}

/// The constraints on one type parameter, rendered as `where T : ...`.
#[derive(Debug, Clone)]
pub struct TypeParameterConstraintBuilder {
    state: Shared<ConstraintClause>,
}

impl_identity!(TypeParameterConstraintBuilder);

impl TypeParameterConstraintBuilder {
    pub fn new(type_parameter: &str) -> Result<Self> {
        let type_parameter = required(type_parameter, "type_parameter")?;
        Ok(Self {
            state: Shared::new(ConstraintClause {
                type_parameter,
                constraints: Vec::new(),
            }),
        })
    }

    /// `class`
    pub fn with_class(&self) -> Self {
        self.push(Constraint::Class)
    }

    /// `struct`
    pub fn with_struct(&self) -> Self {
        self.push(Constraint::Struct)
    }

    /// `new()`
    pub fn with_parameterless_constructor(&self) -> Self {
        self.push(Constraint::New)
    }

    /// A base type or interface the argument must derive from.
    pub fn with_type(&self, type_name: &str) -> Result<Self> {
        let type_name = required(type_name, "type_name")?;
        Ok(self.push(Constraint::Type(type_name)))
    }

    fn push(&self, constraint: Constraint) -> Self {
        self.state.update(|s| s.constraints.push(constraint));
        self.clone()
    }

    pub fn build(&self) -> ConstraintClause {
        self.state.get().clone()
    }

    pub fn render(&self) -> String {
        self.build().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parameter() {
        let tp = TypeParameterBuilder::new("T").unwrap();
        assert_eq!(tp.build().name, "T");
        assert!(TypeParameterBuilder::new("").is_err());
        assert!(TypeParameterBuilder::new("  ").is_err());
    }

    #[test]
    fn test_all_constraint_kinds_in_call_order() {
        let clause = TypeParameterConstraintBuilder::new("T")
            .unwrap()
            .with_class()
            .with_struct()
            .with_parameterless_constructor()
            .with_type("TType")
            .unwrap();
        assert_eq!(clause.render(), "where T : class, struct, new(), TType");
    }

    #[test]
    fn test_constraint_validation() {
        assert_eq!(
            TypeParameterConstraintBuilder::new(" ").unwrap_err().argument(),
            "type_parameter"
        );
        let clause = TypeParameterConstraintBuilder::new("T").unwrap();
        assert_eq!(clause.with_type("").unwrap_err().argument(), "type_name");
        assert!(clause.build().is_empty());
    }

    #[test]
    fn test_setters_return_same_builder() {
        let clause = TypeParameterConstraintBuilder::new("T").unwrap();
        assert!(clause.ptr_eq(&clause.with_class()));
    }
}
